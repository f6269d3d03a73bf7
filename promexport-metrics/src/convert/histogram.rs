// promexport - bitdrift's Prometheus to managed monitoring exporter
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./histogram_test.rs"]
mod histogram_test;

use crate::backend::Distribution;
use promexport_common::{LossyFloatToInt, LossyIntoToFloat};
use promexport_protobuf::protos::prometheus::write::v2::types::Histogram;
use promexport_protobuf::protos::prometheus::write::v2::types::histogram::Count;

// Native histograms with custom bucket boundaries carried in `custom_values`.
pub const CUSTOM_BUCKETS_SCHEMA: i32 = -53;

// Convert a native histogram with custom buckets into a distribution with explicit bounds. Integer
// histograms carry delta encoded bucket counts, float histograms carry absolute counts. Spans place
// the populated buckets. The result has one bucket per bound plus the overflow bucket.
pub fn histogram_to_distribution(histogram: &Histogram) -> Result<Distribution, String> {
  if histogram.schema != CUSTOM_BUCKETS_SCHEMA {
    return Err(format!(
      "exponential bucket schema {} not implemented yet",
      histogram.schema
    ));
  }
  if !histogram.negative_spans.is_empty() {
    return Err("custom bucket histograms cannot have negative buckets".to_string());
  }
  if histogram
    .custom_values
    .windows(2)
    .any(|pair| pair[0] >= pair[1])
  {
    return Err("custom bucket bounds must be strictly increasing".to_string());
  }

  let (count, values) = match histogram.count {
    Some(Count::CountFloat(count)) => {
      if histogram.positive_counts.iter().any(|count| *count < 0.0) {
        return Err("negative bucket count".to_string());
      }
      (
        count.lossy_to_u64(),
        histogram
          .positive_counts
          .iter()
          .map(|count| count.lossy_to_u64())
          .collect::<Vec<_>>(),
      )
    },
    Some(Count::CountInt(count)) => (count, decode_deltas(&histogram.positive_deltas)?),
    None => (0, decode_deltas(&histogram.positive_deltas)?),
    Some(_) => return Err("unsupported count encoding".to_string()),
  };

  let bounds = histogram.custom_values.clone();
  let mut bucket_counts = vec![0; bounds.len() + 1];
  let mut values = values.into_iter();
  let mut index: i64 = 0;
  for span in &histogram.positive_spans {
    index += i64::from(span.offset);
    for _ in 0 .. span.length {
      let value = values
        .next()
        .ok_or_else(|| "bucket spans describe more buckets than provided".to_string())?;
      let slot = usize::try_from(index)
        .ok()
        .and_then(|index| bucket_counts.get_mut(index))
        .ok_or_else(|| format!("bucket index {index} out of range"))?;
      *slot = value;
      index += 1;
    }
  }
  if values.next().is_some() {
    return Err("bucket spans describe fewer buckets than provided".to_string());
  }

  let mean = if count == 0 {
    0.0
  } else {
    histogram.sum / count.lossy_to_f64()
  };

  Ok(Distribution {
    count,
    mean,
    sum_of_squared_deviation: 0.0,
    bounds,
    bucket_counts,
  })
}

// Integer histograms carry each bucket count as a delta to the previous bucket.
fn decode_deltas(deltas: &[i64]) -> Result<Vec<u64>, String> {
  let mut values = Vec::with_capacity(deltas.len());
  let mut current: i64 = 0;
  for delta in deltas {
    current = current
      .checked_add(*delta)
      .ok_or_else(|| "bucket count overflow".to_string())?;
    values.push(u64::try_from(current).map_err(|_| "negative bucket count".to_string())?);
  }
  Ok(values)
}
