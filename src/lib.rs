pub mod configuration;

pub mod holiday {
    pub mod holiday;
    pub mod customholiday;
    pub mod calendarbuilder;
}

pub mod optimizer {
    pub mod daycostcalendar;
    pub mod optimizationresult;
    pub mod windowsearch;
    pub mod rankingselection;
    pub mod efficiencylabel;
}

pub mod plan {
    pub mod storedplan;
    pub mod validation;
}

pub mod time {
    pub mod utility;
    pub mod rangeofdates;
    pub mod easter;
}
