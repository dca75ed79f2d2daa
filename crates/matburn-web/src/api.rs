use gloo_net::http::{Request, Response};
use matburn_core::{ApiError, BenchmarkResult, ResourceSample, StressReport};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
struct BenchmarkRequest {
    size: u32,
}

#[derive(Debug, Clone, Serialize)]
struct StressRequest {
    duration: u32,
}

pub async fn run_benchmark(size: u32) -> Result<BenchmarkResult, ApiError> {
    let resp = Request::post("/run-benchmark")
        .json(&BenchmarkRequest { size })
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode(resp).await
}

pub async fn stress_test(duration: u32) -> Result<StressReport, ApiError> {
    let resp = Request::post("/stress-test")
        .json(&StressRequest { duration })
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode(resp).await
}

pub async fn fetch_system_stats() -> Result<ResourceSample, ApiError> {
    let resp = Request::get("/system-stats")
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode(resp).await
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
