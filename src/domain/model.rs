use serde::{Deserialize, Serialize};
use std::fmt;

/// 機場代碼：不做格式驗證的字串
pub type AirportCode = String;

/// 從輸入檔載入的機場代碼，保留原始順序與重複項
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeList {
    codes: Vec<AirportCode>,
}

impl CodeList {
    pub fn new(codes: Vec<AirportCode>) -> Self {
        Self { codes }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.codes.get(index).map(String::as_str)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    pub fn as_slice(&self) -> &[AirportCode] {
        &self.codes
    }
}

impl FromIterator<AirportCode> for CodeList {
    fn from_iter<I: IntoIterator<Item = AirportCode>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A synthetic route. Written without delimiters, e.g. `SFOOAKMSP`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    pub stops: Vec<AirportCode>,
}

impl Route {
    pub fn num_stops(&self) -> usize {
        self.stops.len()
    }

    pub fn to_writeable(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stop in &self.stops {
            f.write_str(stop)?;
        }
        Ok(())
    }
}

/// 一個出發機場及要產生的路線數量
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSpec {
    pub origin: AirportCode,
    pub count: usize,
}

impl BatchSpec {
    pub fn new(origin: impl Into<AirportCode>, count: usize) -> Self {
        Self {
            origin: origin.into(),
            count,
        }
    }
}

/// LAX 5, CVG 8, ABQ 12
pub fn default_plan() -> Vec<BatchSpec> {
    vec![
        BatchSpec::new("LAX", 5),
        BatchSpec::new("CVG", 8),
        BatchSpec::new("ABQ", 12),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteBatch {
    pub origin: AirportCode,
    pub routes: Vec<Route>,
}

impl RouteBatch {
    pub fn count(&self) -> usize {
        self.routes.len()
    }
}

/// What the load phase wrote, and where.
#[derive(Debug, Clone)]
pub struct LoadResult {
    pub output_path: String,
    pub batches: Vec<RouteBatch>,
}

impl LoadResult {
    pub fn total_routes(&self) -> usize {
        self.batches.iter().map(RouteBatch::count).sum()
    }
}
