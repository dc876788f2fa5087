/// Liveness probe; the datasource's "Save & Test" expects a literal `OK`.
pub async fn index() -> &'static str {
    "OK"
}
