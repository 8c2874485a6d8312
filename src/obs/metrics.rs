// self
use crate::obs::{Outcome, ProviderStage};

/// Records a stage outcome via the global metrics recorder (when enabled).
pub fn record_outcome(stage: ProviderStage, provider: &str, outcome: Outcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oidc_presets_provider_total",
			"stage" => stage.as_str(),
			"provider" => provider.to_owned(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (stage, provider, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_outcome_without_recorder_is_noop() {
		record_outcome(ProviderStage::MapProfile, "huggingface", Outcome::Failure);
	}
}
