use syslog_logger::syslog::header::{self, Origin, Timestamp};
use syslog_logger::syslog::mask;
use syslog_logger::{Facility, Flags, Level, Prefix, Severity};

#[test]
fn should_have_single_bit_mask_per_level() {
    for severity in Severity::ALL.iter() {
        let level = severity.level().get();
        let bits = mask::mask(severity.level());
        assert_eq!(bits.count_ones(), 1, "level={level}");
        assert_eq!(bits.trailing_zeros(), level as u32, "level={level}");
        assert_eq!(severity.mask(), bits);
    }
}

#[test]
fn should_set_contiguous_bits_up_to_level() {
    for level in 0..=7u8 {
        let bits = mask::up_to(Level::new(level));
        println!("level={level} mask={bits:#x}");
        for bit in 0..32 {
            assert_eq!(bits & (1 << bit) != 0, bit <= level as u32, "level={level} bit={bit}");
        }
    }

    assert_eq!(mask::up_to(Level::EMERG), 0x01);
    assert_eq!(mask::up_to(Level::ERR), 0x0F);
    assert_eq!(mask::up_to(Level::DEBUG), 0xFF);
}

#[test]
fn should_recover_threshold_from_up_to_mask() {
    for level in 0..=7u8 {
        let level = Level::new(level);
        assert_eq!(mask::threshold(mask::up_to(level)), level);
    }
    assert_eq!(mask::threshold(mask::up_to(Level::NONE)), Level::NONE);
}

#[test]
fn should_only_count_lowest_run_for_masks_not_created_by_up_to() {
    //Gapped mask is outside of threshold domain: it is not rejected, but result only reflects lowest run
    assert_eq!(mask::threshold(0b1011), Level::new(1));
    assert_eq!(mask::threshold(0b0100), Level::new(u8::MAX));
}

#[test]
fn should_compute_out_of_range_levels_without_validation() {
    assert_eq!(mask::mask(Level::NONE), 1 << 0x10);
    assert_eq!(mask::up_to(Level::NONE), 0x1FFFF);
    assert_eq!(mask::mask(Level::new(40)), 0);
    assert_eq!(mask::up_to(Level::new(31)), u32::MAX);
    assert_eq!(mask::up_to(Level::new(200)), u32::MAX);
}

#[test]
fn should_pack_and_extract_priority() {
    let priority = mask::make_priority(Facility::LOG_LOCAL3, Level::WARNING);
    assert_eq!(priority, (19 << 3) | 4);
    assert_eq!(Severity::LOG_WARNING.priority(Facility::LOG_LOCAL3), priority);
    assert_eq!(mask::priority_level(priority), Level::WARNING);
    assert_eq!(mask::priority_facility(priority), 19);
    assert_eq!(Facility::from_code(mask::priority_facility(priority)), Some(Facility::LOG_LOCAL3));

    let mark = mask::make_priority(Facility::INTERNAL_MARK, Level::EMERG);
    assert_eq!(mask::priority_facility(mark), 24);
    assert_eq!(Facility::from_code(24), Some(Facility::INTERNAL_MARK));
    assert_eq!(Facility::from_code(12), None);
}

#[test]
fn should_name_levels() {
    let expected = ["emerg", "alert", "crit", "err", "warning", "notice", "info", "debug"];
    for (severity, name) in Severity::ALL.iter().zip(expected.iter()) {
        assert_eq!(severity.name(), *name);
        assert_eq!(severity.level().name(), Some(*name));
        assert_eq!(Level::from_name(name), Some(severity.level()));
        assert_eq!(Severity::from_level(severity.level()), Some(*severity));
    }

    assert_eq!(Level::NONE.name(), Some("none"));
    assert_eq!(Level::from_name("NoNe"), Some(Level::NONE));
    assert_eq!(Level::from_name("WARNING"), Some(Level::WARNING));
    assert_eq!(Level::from_name("error"), None);
    assert_eq!(Level::new(8).name(), None);
    assert_eq!(Severity::from_level(Level::NONE), None);
    assert_eq!(Level::NONE.to_string(), "none");
    assert_eq!(Level::new(9).to_string(), "9");
}

#[test]
fn should_name_facilities() {
    assert_eq!(Facility::LOG_KERN.name(), "kern");
    assert_eq!(Facility::LOG_AUTHPRIV.name(), "authpriv");
    assert_eq!(Facility::LOG_LOCAL7.name(), "local7");
    assert_eq!(Facility::INTERNAL_MARK.name(), "mark");
    assert_eq!(Facility::from_name("Daemon"), Some(Facility::LOG_DAEMON));
    assert_eq!(Facility::from_name("security"), None);
    assert_eq!(Facility::default(), Facility::LOG_USER);
    assert_eq!(Facility::LOG_FTP.code(), 11);
    for code in 0..=Facility::INTERNAL_MARK.code() {
        if let Some(fac) = Facility::from_code(code) {
            assert_eq!(Facility::from_name(fac.name()), Some(fac), "code={code}");
            assert_eq!(fac.to_string(), fac.name());
        }
    }
}

#[test]
fn should_verify_prefix_ctor() {
    const PREFIX: Prefix = match Prefix::new("app: ") {
        Some(prefix) => prefix,
        None => panic!("not valid prefix"),
    };
    assert_eq!(PREFIX, "app: ");
    assert_eq!(Prefix::EMPTY, "");

    let mut text = String::new();
    for idx in 0..64 {
        text.push(char::from(b'a' + idx % 9));
    }
    let prefix = Prefix::new(&text).expect("to create 64 long prefix");
    assert_eq!(prefix.as_str(), text);
    text.push('z');
    assert!(Prefix::new(&text).is_none());
}

#[test]
fn should_generate_header() {
    const PREFIX: Prefix = match Prefix::new("app: ") {
        Some(prefix) => prefix,
        None => panic!("not valid prefix"),
    };
    let origin = Origin {
        file: "src/bin/main.rs",
        line: 42,
    };
    let render = |flags| {
        let header = header::Header {
            prefix: &PREFIX,
            flags,
            timestamp: Timestamp {
                year: 2009,
                month: 0,
                day: 23,
                sec: 3,
                min: 2,
                hour: 1,
                micro: 4567,
            },
            pid: 1234,
            origin,
        };
        let mut out = String::new();
        header.write_buffer(&mut out).expect("to write header");
        out
    };

    assert_eq!(render(Flags::EMPTY), "app: ");
    assert_eq!(render(Flags::STD), "app: 2009/01/23 01:02:03 ");
    assert_eq!(render(Flags::TIME | Flags::PID), "app: 01:02:03 [1234] ");
    assert_eq!(render(Flags::LONG_FILE), "app: src/bin/main.rs:42: ");
    assert_eq!(render(Flags::LONG_FILE | Flags::SHORT_FILE), "app: main.rs:42: ");
    assert_eq!(render(Flags::DATE | Flags::MSG_PREFIX), "2009/01/23 app: ");
    assert_eq!(render(Flags::MICROSECONDS), "app: 01:02:03.004567 ");
    assert_eq!(render(Flags::STD | Flags::MICROSECONDS), "app: 2009/01/23 01:02:03.004567 ");
}

#[test]
fn should_combine_flags() {
    let mut flags = Flags::DATE;
    flags |= Flags::TIME;
    assert_eq!(flags, Flags::STD);
    assert!(flags.contains(Flags::DATE));
    assert!(!flags.contains(Flags::DATE | Flags::PID));
    assert_eq!(Flags::default(), Flags::EMPTY);
    assert_eq!(Flags::STD.bits(), 0b11);
    assert_eq!((Flags::PID | Flags::MICROSECONDS).bits(), 0b110_0000);
}
