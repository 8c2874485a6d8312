// self
use crate::{_prelude::*, obs::ProviderStage};

/// A span wrapper used around instrumented provider stages.
#[derive(Clone, Debug)]
pub struct ProviderSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl ProviderSpan {
	/// Creates a new span tagged with the provider id and stage.
	pub fn new(provider: &str, stage: ProviderStage) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span =
				tracing::debug_span!("oidc_presets.provider", provider, stage = stage.as_str());

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (provider, stage);

			Self {}
		}
	}

	/// Enters the span for the rest of the current scope.
	pub fn entered(self) -> ProviderSpanGuard {
		#[cfg(feature = "tracing")]
		{
			ProviderSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			ProviderSpanGuard {}
		}
	}

	/// Emits a `warn` event describing why the stage failed.
	pub fn record_failure(&self, error: &dyn Display) {
		#[cfg(feature = "tracing")]
		{
			tracing::warn!(parent: &self.span, error = %error, "Provider stage failed.");
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = error;
		}
	}
}

/// RAII guard returned by [`ProviderSpan::entered`].
pub struct ProviderSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for ProviderSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("ProviderSpanGuard(..)")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn provider_span_without_subscriber_is_noop() {
		let span = ProviderSpan::new("huggingface", ProviderStage::Register);
		let _guard = span.clone().entered();

		span.record_failure(&"boom");
	}
}
