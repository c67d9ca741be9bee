use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Chart metadata exactly as reported by the provider.
///
/// Every key is kept as sent, including explicit nulls, so the payload survives a decode/encode
/// cycle unchanged. The accessors read the commonly used keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartMeta(pub Map<String, Value>);

impl ChartMeta {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn symbol(&self) -> Option<&str> {
        self.str_field("symbol")
    }

    pub fn currency(&self) -> Option<&str> {
        self.str_field("currency")
    }

    pub fn exchange_name(&self) -> Option<&str> {
        self.str_field("exchangeName")
    }

    pub fn long_name(&self) -> Option<&str> {
        self.str_field("longName")
    }

    pub fn timezone(&self) -> Option<&str> {
        self.str_field("timezone")
    }

    pub fn regular_market_price(&self) -> Option<f64> {
        self.0.get("regularMarketPrice").and_then(Value::as_f64)
    }

    pub fn gmtoffset(&self) -> Option<i64> {
        self.0.get("gmtoffset").and_then(Value::as_i64)
    }
}

impl From<Map<String, Value>> for ChartMeta {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// One bar. Missing provider values stay `None`; rows are never dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartQuote {
    pub date: DateTime<Utc>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjclose: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dividend {
    pub amount: f64,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Split {
    pub date: DateTime<Utc>,
    pub numerator: u64,
    pub denominator: u64,
    pub split_ratio: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartEvents {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dividends: Vec<Dividend>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub splits: Vec<Split>,
}

/// A decoded chart payload: metadata, bars, and corporate events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub meta: ChartMeta,
    pub quotes: Vec<ChartQuote>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<ChartEvents>,
}
