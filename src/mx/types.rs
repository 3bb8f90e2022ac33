/// One MX answer: preference (lower wins) and exchange hostname.
///
/// Serialized as a `[preference, exchange]` pair.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "with-serde",
    serde(into = "(u16, String)", from = "(u16, String)")
)]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MxRecord {
    pub preference: u16,
    pub exchange: String,
}

impl MxRecord {
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Self {
            preference,
            exchange: exchange.into(),
        }
    }

    /// RFC 7505 null MX: the domain explicitly accepts no mail.
    pub fn is_null(&self) -> bool {
        self.exchange == "."
    }
}

impl From<MxRecord> for (u16, String) {
    fn from(record: MxRecord) -> Self {
        (record.preference, record.exchange)
    }
}

impl From<(u16, String)> for MxRecord {
    fn from((preference, exchange): (u16, String)) -> Self {
        Self::new(preference, exchange)
    }
}

#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MxStatus {
    Records(Vec<MxRecord>),
    NoRecords,
}

impl MxStatus {
    pub fn from_records(records: Vec<MxRecord>) -> Self {
        if records.is_empty() {
            Self::NoRecords
        } else {
            Self::Records(records)
        }
    }

    pub fn records(&self) -> &[MxRecord] {
        match self {
            Self::Records(records) => records.as_slice(),
            Self::NoRecords => &[],
        }
    }

    pub fn into_records(self) -> Vec<MxRecord> {
        match self {
            Self::Records(records) => records,
            Self::NoRecords => Vec::new(),
        }
    }
}
