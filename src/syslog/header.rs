//! Line header components

use core::{fmt, ops};

use str_buf::StrBuf;

#[repr(transparent)]
///Line prefix, limited to 64 bytes
pub struct Prefix(StrBuf<{ str_buf::capacity(64) }>);

impl Prefix {
    ///Empty prefix
    pub const EMPTY: Prefix = Prefix(StrBuf::new());

    #[inline]
    ///Gets prefix
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }

    #[inline]
    ///Creates new prefix
    ///
    ///Returns None if text doesn't fit 64 bytes
    pub const fn new(text: &str) -> Option<Self> {
        match StrBuf::from_str_checked(text) {
            Ok(buffer) => Some(Self(buffer)),
            Err(_) => None,
        }
    }
}

impl Clone for Prefix {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self(StrBuf::from_str(self.as_str()))
    }
}

impl fmt::Debug for Prefix {
    #[inline(always)]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), fmt)
    }
}

impl PartialEq<str> for Prefix {
    #[inline(always)]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Prefix {
    #[inline(always)]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

///Line header annotations
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Flags(u8);

impl Flags {
    ///No annotations
    pub const EMPTY: Flags = Flags(0);
    ///Date in UTC: `2009/01/23`
    pub const DATE: Flags = Flags(1);
    ///Time in UTC: `01:23:23`
    pub const TIME: Flags = Flags(1 << 1);
    ///Full file name and line of the call: `src/main.rs:23`
    pub const LONG_FILE: Flags = Flags(1 << 2);
    ///Final file name component and line of the call: `main.rs:23`.
    ///
    ///Overrides [Flags::LONG_FILE]
    pub const SHORT_FILE: Flags = Flags(1 << 3);
    ///Moves prefix from the beginning of the line to the beginning of the message
    pub const MSG_PREFIX: Flags = Flags(1 << 4);
    ///Process id: `[1234]`
    pub const PID: Flags = Flags(1 << 5);
    ///Microseconds appended to time: `01:23:23.123123`.
    ///
    ///Implies [Flags::TIME]
    pub const MICROSECONDS: Flags = Flags(1 << 6);
    ///Initial flags of default logger
    pub const STD: Flags = Flags(Self::DATE.0 | Self::TIME.0);

    #[inline(always)]
    ///Returns raw value
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline(always)]
    ///Returns whether all of `other` flags are set
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline(always)]
    ///Returns union of flags
    pub const fn union(self, other: Flags) -> Flags {
        Flags(self.0 | other.0)
    }
}

impl ops::BitOr for Flags {
    type Output = Flags;

    #[inline(always)]
    fn bitor(self, other: Flags) -> Self::Output {
        self.union(other)
    }
}

impl ops::BitOrAssign for Flags {
    #[inline(always)]
    fn bitor_assign(&mut self, other: Flags) {
        self.0 |= other.0;
    }
}

///Timestamp components
pub struct Timestamp {
    ///Year
    pub year: u16,
    ///Months since January. Range 0-11
    pub month: u8,
    ///Day of the month. Range 1-31
    pub day: u8,
    ///Seconds after the minute. Range 0-60
    pub sec: u8,
    ///Minutes after the hour. Range 0-59
    pub min: u8,
    ///Hours since midnight. Range 0-23
    pub hour: u8,
    ///Microseconds after the second. Range 0-999999
    pub micro: u32,
}

impl Timestamp {
    ///Creates new UTC timestamp as default value when time is not available
    pub const fn utc() -> Self {
        Self {
            year: 1970,
            month: 0,
            day: 1,
            hour: 0,
            min: 0,
            sec: 0,
            micro: 0,
        }
    }

    ///Creates new current time instance or fallbacks to default UTC time
    pub fn now_utc() -> Self {
        let (time, micro) = match time_c::sys::utc_now() {
            Some(now) => (time_c::Time::parse_unix(&(now.as_secs() as time_c::sys::time_t)), now.subsec_micros()),
            None => (time_c::Time::now_utc(), 0),
        };

        match time {
            Some(time_c::Time { sec, min, hour, month_day, month, year, .. }) => Self {
                year,
                month: month.saturating_sub(1),
                day: month_day,
                hour,
                sec,
                min,
                micro,
            },
            None => Self::utc(),
        }
    }
}

#[derive(Copy, Clone, Debug)]
///Source location of the log call
pub struct Origin<'a> {
    ///File name as reported by compiler
    pub file: &'a str,
    ///Line number
    pub line: u32,
}

impl Origin<'_> {
    ///Returns final component of the file name
    pub fn short_file(&self) -> &str {
        match self.file.rfind(|ch| ch == '/' || ch == '\\') {
            Some(idx) => &self.file[idx + 1..],
            None => self.file,
        }
    }
}

impl From<&'static core::panic::Location<'static>> for Origin<'static> {
    #[inline(always)]
    fn from(location: &'static core::panic::Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

///Header that precedes level tag of every line
pub struct Header<'a> {
    ///Prefix
    pub prefix: &'a Prefix,
    ///Annotations to write
    pub flags: Flags,
    ///Timestamp, written if [Flags::DATE], [Flags::TIME] or [Flags::MICROSECONDS] is set
    pub timestamp: Timestamp,
    ///Process pid, written if [Flags::PID] is set
    pub pid: u32,
    ///Call location, written if [Flags::LONG_FILE] or [Flags::SHORT_FILE] is set
    pub origin: Origin<'a>,
}

impl<'a> Header<'a> {
    ///Creates header, only querying time and pid when flags need them
    pub fn new(prefix: &'a Prefix, flags: Flags, origin: Origin<'a>) -> Self {
        let timestamp = if flags.contains(Flags::DATE) || flags.contains(Flags::TIME) || flags.contains(Flags::MICROSECONDS) {
            Timestamp::now_utc()
        } else {
            Timestamp::utc()
        };
        let pid = if flags.contains(Flags::PID) {
            os_id::process::get_raw_id() as u32
        } else {
            0
        };

        Self {
            prefix,
            flags,
            timestamp,
            pid,
            origin,
        }
    }

    ///Writes header into `out`
    ///
    ///Every present component is followed by single space (`: ` for location)
    pub fn write_buffer(&self, out: &mut impl fmt::Write) -> fmt::Result {
        let Self { prefix, flags, timestamp, pid, origin } = self;
        let Timestamp { year, day, hour, sec, min, micro, .. } = timestamp;

        if !flags.contains(Flags::MSG_PREFIX) {
            out.write_str(prefix.as_str())?;
        }
        if flags.contains(Flags::DATE) {
            let month = timestamp.month.wrapping_add(1);
            out.write_fmt(format_args!("{year:>04}/{month:>02}/{day:>02} "))?;
        }
        if flags.contains(Flags::MICROSECONDS) {
            out.write_fmt(format_args!("{hour:>02}:{min:>02}:{sec:>02}.{micro:>06} "))?;
        } else if flags.contains(Flags::TIME) {
            out.write_fmt(format_args!("{hour:>02}:{min:>02}:{sec:>02} "))?;
        }
        if flags.contains(Flags::PID) {
            out.write_fmt(format_args!("[{pid}] "))?;
        }
        if flags.contains(Flags::SHORT_FILE) {
            out.write_fmt(format_args!("{}:{}: ", origin.short_file(), origin.line))?;
        } else if flags.contains(Flags::LONG_FILE) {
            out.write_fmt(format_args!("{}:{}: ", origin.file, origin.line))?;
        }
        if flags.contains(Flags::MSG_PREFIX) {
            out.write_str(prefix.as_str())?;
        }

        Ok(())
    }
}
