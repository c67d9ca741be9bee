use chrono::{DateTime, Utc};

use crate::chart::model::{ChartEvents, ChartQuote, Dividend, Split};
use crate::chart::wire::{Events, QuoteBlock};
use crate::core::FbError;

fn to_utc(ts: i64) -> Result<DateTime<Utc>, FbError> {
    DateTime::from_timestamp(ts, 0)
        .ok_or_else(|| FbError::Data(format!("timestamp out of range: {ts}")))
}

/// Zips the columnar quote block into one row per timestamp.
pub(crate) fn assemble_quotes(
    ts: &[i64],
    q: &QuoteBlock,
    adjclose: &[Option<f64>],
) -> Result<Vec<ChartQuote>, FbError> {
    let col = |v: &[Option<f64>], i: usize| v.get(i).copied().flatten();

    ts.iter()
        .enumerate()
        .map(|(i, &t)| {
            Ok(ChartQuote {
                date: to_utc(t)?,
                open: col(&q.open, i),
                high: col(&q.high, i),
                low: col(&q.low, i),
                close: col(&q.close, i),
                volume: q.volume.get(i).copied().flatten(),
                adjclose: col(adjclose, i),
            })
        })
        .collect()
}

/// Flattens the keyed event maps into date-sorted lists. Incomplete events are skipped.
pub(crate) fn assemble_events(events: Option<Events>) -> Result<Option<ChartEvents>, FbError> {
    let Some(events) = events else {
        return Ok(None);
    };

    let mut out = ChartEvents::default();

    for d in events.dividends.unwrap_or_default().into_values() {
        if let (Some(amount), Some(date)) = (d.amount, d.date) {
            out.dividends.push(Dividend {
                amount,
                date: to_utc(date)?,
            });
        }
    }

    for s in events.splits.unwrap_or_default().into_values() {
        let (Some(numerator), Some(denominator), Some(date)) = (s.numerator, s.denominator, s.date)
        else {
            continue;
        };
        out.splits.push(Split {
            date: to_utc(date)?,
            numerator,
            denominator,
            split_ratio: s
                .split_ratio
                .unwrap_or_else(|| format!("{numerator}:{denominator}")),
        });
    }

    out.dividends.sort_by_key(|d| d.date);
    out.splits.sort_by_key(|s| s.date);

    Ok(Some(out))
}
