//! Syslog levels and facilities
//!
//! Reference: syslog.h

pub mod header;
pub mod mask;

use core::fmt;

///Mask to extract level part of the priority
pub const LOG_PRIMASK: u16 = 0x07;
///Mask to extract facility part of the priority
pub const LOG_FACMASK: u16 = 0x03f8;
///Current number of facilities
pub const LOG_NFACILITIES: u8 = 24;

///Log importance
#[repr(u8)]
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    ///system is unusable
    LOG_EMERG = 0,
    ///action must be taken immediately
    LOG_ALERT = 1,
    ///critical conditions
    LOG_CRIT = 2,
    ///error conditions
    LOG_ERR = 3,
    ///warning conditions
    LOG_WARNING = 4,
    ///normal but significant condition
    LOG_NOTICE = 5,
    ///informational
    LOG_INFO = 6,
    ///debug-level messages
    LOG_DEBUG = 7,
}

impl Severity {
    ///All severities, from most to least severe
    pub const ALL: [Severity; 8] = [
        Severity::LOG_EMERG,
        Severity::LOG_ALERT,
        Severity::LOG_CRIT,
        Severity::LOG_ERR,
        Severity::LOG_WARNING,
        Severity::LOG_NOTICE,
        Severity::LOG_INFO,
        Severity::LOG_DEBUG,
    ];

    #[inline(always)]
    ///Returns level of the severity
    pub const fn level(self) -> Level {
        Level(self as u8)
    }

    #[inline(always)]
    ///Returns canonical lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Severity::LOG_EMERG => "emerg",
            Severity::LOG_ALERT => "alert",
            Severity::LOG_CRIT => "crit",
            Severity::LOG_ERR => "err",
            Severity::LOG_WARNING => "warning",
            Severity::LOG_NOTICE => "notice",
            Severity::LOG_INFO => "info",
            Severity::LOG_DEBUG => "debug",
        }
    }

    #[inline(always)]
    ///Returns single bit mask of this severity
    pub const fn mask(self) -> u32 {
        mask::mask(self.level())
    }

    #[inline(always)]
    ///Encodes severity into priority with corresponding facility
    pub const fn priority(self, fac: Facility) -> u16 {
        mask::make_priority(fac, self.level())
    }

    ///Converts level into severity, if it is one of 8 real levels
    pub const fn from_level(level: Level) -> Option<Self> {
        match level.0 {
            0 => Some(Severity::LOG_EMERG),
            1 => Some(Severity::LOG_ALERT),
            2 => Some(Severity::LOG_CRIT),
            3 => Some(Severity::LOG_ERR),
            4 => Some(Severity::LOG_WARNING),
            5 => Some(Severity::LOG_NOTICE),
            6 => Some(Severity::LOG_INFO),
            7 => Some(Severity::LOG_DEBUG),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    #[inline(always)]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.name())
    }
}

///Raw level value.
///
///Unlike [Severity] it is not a closed set: it also covers [Level::NONE] and any other integer
///that callers may pass to mask functions.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u8);

///Level name table
static LEVEL_NAMES: [(Level, &str); 9] = [
    (Level::ALERT, "alert"),
    (Level::CRIT, "crit"),
    (Level::DEBUG, "debug"),
    (Level::EMERG, "emerg"),
    (Level::ERR, "err"),
    (Level::INFO, "info"),
    (Level::NONE, "none"),
    (Level::NOTICE, "notice"),
    (Level::WARNING, "warning"),
];

impl Level {
    ///system is unusable
    pub const EMERG: Level = Level(0);
    ///action must be taken immediately
    pub const ALERT: Level = Level(1);
    ///critical conditions
    pub const CRIT: Level = Level(2);
    ///error conditions
    pub const ERR: Level = Level(3);
    ///warning conditions
    pub const WARNING: Level = Level(4);
    ///normal but significant condition
    pub const NOTICE: Level = Level(5);
    ///informational
    pub const INFO: Level = Level(6);
    ///debug-level messages
    pub const DEBUG: Level = Level(7);
    ///The "no priority" priority
    pub const NONE: Level = Level(0x10);

    #[inline(always)]
    ///Creates level from raw value without any validation
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    #[inline(always)]
    ///Returns raw value
    pub const fn get(self) -> u8 {
        self.0
    }

    ///Returns canonical name, if level has one
    pub fn name(self) -> Option<&'static str> {
        LEVEL_NAMES.iter().find(|(level, _)| *level == self).map(|(_, name)| *name)
    }

    ///Looks up level by its canonical name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<Self> {
        LEVEL_NAMES.iter().find(|(_, known)| known.eq_ignore_ascii_case(name)).map(|(level, _)| *level)
    }
}

impl From<Severity> for Level {
    #[inline(always)]
    fn from(severity: Severity) -> Self {
        severity.level()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => fmt.write_str(name),
            None => fmt::Display::fmt(&self.0, fmt),
        }
    }
}

///Facility code, indicating source of log
#[repr(u8)]
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Facility {
    ///Kernel
    LOG_KERN = 0 << 3,
    ///User space application (Default leveL)
    LOG_USER = 1 << 3,
    ///Mail system
    LOG_MAIL = 2 << 3,
    ///System daemon
    LOG_DAEMON = 3 << 3,
    ///Security
    LOG_AUTH = 4 << 3,
    ///Internal syslogd
    LOG_SYSLOG = 5 << 3,
    ///Line printer
    LOG_LPR = 6 << 3,
    ///News
    LOG_NEWS = 7 << 3,
    ///Unix-to-Unix Copy
    LOG_UUCP = 8 << 3,
    ///Cron daemon
    LOG_CRON = 9 << 3,
    ///Security (private)
    LOG_AUTHPRIV = 10 << 3,
    ///FTP daemon
    LOG_FTP = 11 << 3,
    ///Reserved for local use
    LOG_LOCAL0 = 16 << 3,
    ///Reserved for local use
    LOG_LOCAL1 = 17 << 3,
    ///Reserved for local use
    LOG_LOCAL2 = 18 << 3,
    ///Reserved for local use
    LOG_LOCAL3 = 19 << 3,
    ///Reserved for local use
    LOG_LOCAL4 = 20 << 3,
    ///Reserved for local use
    LOG_LOCAL5 = 21 << 3,
    ///Reserved for local use
    LOG_LOCAL6 = 22 << 3,
    ///Reserved for local use
    LOG_LOCAL7 = 23 << 3,
    ///Internal mark facility
    INTERNAL_MARK = LOG_NFACILITIES << 3,
}

///Facility name table, used for lookups
static FACILITY_NAMES: [(Facility, &str); 21] = [
    (Facility::LOG_AUTH, "auth"),
    (Facility::LOG_AUTHPRIV, "authpriv"),
    (Facility::LOG_CRON, "cron"),
    (Facility::LOG_DAEMON, "daemon"),
    (Facility::LOG_FTP, "ftp"),
    (Facility::LOG_KERN, "kern"),
    (Facility::LOG_LPR, "lpr"),
    (Facility::LOG_MAIL, "mail"),
    (Facility::INTERNAL_MARK, "mark"),
    (Facility::LOG_NEWS, "news"),
    (Facility::LOG_SYSLOG, "syslog"),
    (Facility::LOG_USER, "user"),
    (Facility::LOG_UUCP, "uucp"),
    (Facility::LOG_LOCAL0, "local0"),
    (Facility::LOG_LOCAL1, "local1"),
    (Facility::LOG_LOCAL2, "local2"),
    (Facility::LOG_LOCAL3, "local3"),
    (Facility::LOG_LOCAL4, "local4"),
    (Facility::LOG_LOCAL5, "local5"),
    (Facility::LOG_LOCAL6, "local6"),
    (Facility::LOG_LOCAL7, "local7"),
];

impl Facility {
    #[inline(always)]
    ///Returns facility code (value without shift)
    pub const fn code(self) -> u8 {
        (self as u8) >> 3
    }

    ///Returns canonical lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Facility::LOG_KERN => "kern",
            Facility::LOG_USER => "user",
            Facility::LOG_MAIL => "mail",
            Facility::LOG_DAEMON => "daemon",
            Facility::LOG_AUTH => "auth",
            Facility::LOG_SYSLOG => "syslog",
            Facility::LOG_LPR => "lpr",
            Facility::LOG_NEWS => "news",
            Facility::LOG_UUCP => "uucp",
            Facility::LOG_CRON => "cron",
            Facility::LOG_AUTHPRIV => "authpriv",
            Facility::LOG_FTP => "ftp",
            Facility::LOG_LOCAL0 => "local0",
            Facility::LOG_LOCAL1 => "local1",
            Facility::LOG_LOCAL2 => "local2",
            Facility::LOG_LOCAL3 => "local3",
            Facility::LOG_LOCAL4 => "local4",
            Facility::LOG_LOCAL5 => "local5",
            Facility::LOG_LOCAL6 => "local6",
            Facility::LOG_LOCAL7 => "local7",
            Facility::INTERNAL_MARK => "mark",
        }
    }

    ///Looks up facility by its canonical name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<Self> {
        FACILITY_NAMES.iter().find(|(_, known)| known.eq_ignore_ascii_case(name)).map(|(fac, _)| *fac)
    }

    ///Looks up facility by its code, as returned by [mask::priority_facility]
    pub fn from_code(code: u8) -> Option<Self> {
        FACILITY_NAMES.iter().find(|(fac, _)| fac.code() == code).map(|(fac, _)| *fac)
    }
}

impl Default for Facility {
    #[inline(always)]
    fn default() -> Self {
        Self::LOG_USER
    }
}

impl fmt::Display for Facility {
    #[inline(always)]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.name())
    }
}
