pub mod configuration;
pub mod error;

pub mod culture {
    pub mod workingdayculture;
    pub mod cultureregistry;
    pub mod cultureloader;
}

pub mod holiday {
    pub mod recurringholiday;
    pub mod fixeddateholiday;
    pub mod easterrelatedholiday;
    pub mod nthweekdayholiday;
    pub mod lastweekdayholiday;
    pub mod holiday;
    pub mod christianholidays;
    pub mod globalholidays;
}

pub mod strategy {
    pub mod holidaystrategy;
    pub mod defaultholidaystrategy;
    pub mod christianholidaystrategy;
    pub mod weekendadjustment;
    pub mod yearcache;
    pub mod nationalholidaystrategy;
    pub mod unitedstates;
    pub mod portugal;
    pub mod weekdaypolicy;
}

pub mod time {
    pub mod utility;
    pub mod easter;
    pub mod weekdayops;
}
