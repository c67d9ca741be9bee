use crate::chart::assemble::{assemble_events, assemble_quotes};
use crate::chart::model::Chart;
use crate::chart::params::{BarSize, Range};
use crate::chart::wire::ChartEnvelope;
use crate::core::{ChartClient, FbError};
use url::Url;

pub(crate) async fn fetch_chart(
    client: &ChartClient,
    symbol: &str,
    range: Option<Range>,
    period: Option<(i64, i64)>,
    interval: BarSize,
    include_events: bool,
) -> Result<Chart, FbError> {
    let mut url = chart_url(client.base_chart(), symbol)?;
    {
        let mut qp = url.query_pairs_mut();

        if let Some((p1, p2)) = period {
            if p1 >= p2 {
                return Err(FbError::InvalidDates);
            }
            qp.append_pair("period1", &p1.to_string());
            qp.append_pair("period2", &p2.to_string());
        } else if let Some(r) = range {
            qp.append_pair("range", r.as_str());
        } else {
            return Err(FbError::Data("no range or period set".into()));
        }

        qp.append_pair("interval", interval.as_str());
        if include_events {
            qp.append_pair("events", "div|split");
        }
        qp.append_pair("includePrePost", "false");
    }

    tracing::debug!(%url, "requesting chart");

    let resp = client.http().get(url.clone()).send().await?;
    let status = resp.status();
    let body = crate::core::net::get_text(resp, "history_chart", symbol, "json").await?;

    if !status.is_success() {
        // Unknown symbols come back as 404 with a chart.error object worth surfacing.
        if let Ok(ChartEnvelope {
            chart: Some(node), ..
        }) = serde_json::from_str::<ChartEnvelope>(&body)
        {
            if let Some(err) = node.error {
                return Err(FbError::Upstream {
                    code: err.code,
                    description: err.description,
                });
            }
        }
        return Err(FbError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    decode_chart(&body)
}

/// Appends `symbol` to the chart base as a single percent-encoded path segment.
///
/// The symbol never changes the scheme, host or parent path of the base.
pub(crate) fn chart_url(base: &Url, symbol: &str) -> Result<Url, FbError> {
    if symbol.is_empty() || symbol == "." || symbol == ".." {
        return Err(FbError::Data(format!("invalid symbol '{symbol}'")));
    }
    let mut url = base.clone();
    url.set_query(None);
    url.path_segments_mut()
        .map_err(|()| FbError::Data(format!("chart base cannot take a path: {base}")))?
        .pop_if_empty()
        .push(symbol);
    Ok(url)
}

pub(crate) fn decode_chart(body: &str) -> Result<Chart, FbError> {
    let parsed: ChartEnvelope =
        serde_json::from_str(body).map_err(|e| FbError::Data(format!("json parse error: {e}")))?;

    let chart = parsed
        .chart
        .ok_or_else(|| FbError::Data("missing chart".into()))?;

    if let Some(err) = chart.error {
        return Err(FbError::Upstream {
            code: err.code,
            description: err.description,
        });
    }

    let mut results = chart
        .result
        .ok_or_else(|| FbError::Data("missing result".into()))?;

    let r0 = results
        .pop()
        .ok_or_else(|| FbError::Data("empty result".into()))?;

    let ts = r0.timestamp.unwrap_or_default();
    let quote = r0.indicators.quote.into_iter().next().unwrap_or_default();
    let adjclose = r0
        .indicators
        .adjclose
        .into_iter()
        .next()
        .map(|a| a.adjclose)
        .unwrap_or_default();

    Ok(Chart {
        meta: r0.meta.unwrap_or_default(),
        quotes: assemble_quotes(&ts, &quote, &adjclose)?,
        events: assemble_events(r0.events)?,
    })
}
