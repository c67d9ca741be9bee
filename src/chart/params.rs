/// A relative chart range understood by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Range {
    D1,
    D5,
    M1,
    M3,
    Y1,
}

impl Range {
    pub fn as_str(self) -> &'static str {
        match self {
            Range::D1 => "1d",
            Range::D5 => "5d",
            Range::M1 => "1mo",
            Range::M3 => "3mo",
            Range::Y1 => "1y",
        }
    }
}

/// The bar size of each quote in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarSize {
    I5m,
    I60m,
    D1,
    W1,
}

impl BarSize {
    pub fn as_str(self) -> &'static str {
        match self {
            BarSize::I5m => "5m",
            BarSize::I60m => "60m",
            BarSize::D1 => "1d",
            BarSize::W1 => "1wk",
        }
    }
}
