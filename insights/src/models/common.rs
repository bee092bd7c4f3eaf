use std::collections::HashMap;

/// Free-form JSON object attached to prompts (parameters), responses
/// (vendor-reported metadata), and providers (credentials/defaults).
pub type Metadata = HashMap<String, serde_json::Value>;
