use serde_json::{Map, Value};

/// The untyped configuration a plugin receives for one crawl run.
pub type ConfigPayload = Map<String, Value>;

/// A typed accessor layer over a plugin's per-run [`ConfigPayload`].
///
/// Validators never fail: accessors fall back to defaults when keys are missing
/// or malformed. The JSON schema they declare is metadata for whatever renders or
/// validates configuration upstream and has no runtime effect here.
pub trait InputValidator: Sized {
    /// Wraps a raw payload.
    fn from_payload(payload: ConfigPayload) -> Self;

    /// Describes the payload's shape: field names, types, defaults and
    /// presentation hints.
    fn json_schema() -> Value;

    /// The raw payload this validator wraps.
    fn data(&self) -> &ConfigPayload;

    /// `true` when the run supplied no configuration at all.
    fn is_empty(&self) -> bool {
        self.data().is_empty()
    }
}
