/// Read-time bucket offered in the post list sidebar, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadTimeBucket {
    UnderFive,
    FiveToTen,
    OverTen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadTimeRange {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl ReadTimeBucket {
    pub const ALL: [ReadTimeBucket; 3] = [
        ReadTimeBucket::UnderFive,
        ReadTimeBucket::FiveToTen,
        ReadTimeBucket::OverTen,
    ];

    pub fn from_keyword(keyword: &str) -> Option<ReadTimeBucket> {
        Self::ALL.into_iter().find(|bucket| bucket.keyword() == keyword)
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            ReadTimeBucket::UnderFive => "under-5",
            ReadTimeBucket::FiveToTen => "5-10",
            ReadTimeBucket::OverTen => "over-10",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReadTimeBucket::UnderFive => "Under 5 min",
            ReadTimeBucket::FiveToTen => "5–10 min",
            ReadTimeBucket::OverTen => "Over 10 min",
        }
    }

    /// Inclusive bounds. Read time is stored in whole minutes.
    pub fn range(&self) -> ReadTimeRange {
        match self {
            ReadTimeBucket::UnderFive => ReadTimeRange { min: None, max: Some(4) },
            ReadTimeBucket::FiveToTen => ReadTimeRange { min: Some(5), max: Some(10) },
            ReadTimeBucket::OverTen => ReadTimeRange { min: Some(11), max: None },
        }
    }
}
