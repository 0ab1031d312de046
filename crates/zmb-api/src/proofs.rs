//! Payment-proof upload and review.
//!
//! A proof is submitted in two steps: the receipt file goes to the asset
//! host as multipart form data, then the returned URL is attached to the
//! order through the REST API.

use std::path::Path;

use serde::{Deserialize, Serialize};
use zmb_core::entities::{PaymentProof, ProofReview};

use crate::http::{check_response, decode};
use crate::{ApiClient, ApiError};

/// Largest receipt the asset host accepts.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

const ACCEPTED_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp", "application/pdf"];

#[derive(Deserialize)]
struct UploadResponse {
    url: String,
}

#[derive(Serialize)]
struct SubmitProof<'a> {
    url: &'a str,
}

/// Validate a receipt before reading it, returning its MIME type.
fn check_upload(path: &Path, len: u64) -> Result<&'static str, ApiError> {
    if len == 0 {
        return Err(ApiError::InvalidUpload(format!(
            "{} is empty",
            path.display()
        )));
    }
    if len > MAX_UPLOAD_BYTES {
        return Err(ApiError::InvalidUpload(format!(
            "{} is {len} bytes; the limit is {MAX_UPLOAD_BYTES}",
            path.display()
        )));
    }
    mime_guess::from_path(path)
        .iter()
        .find_map(|mime| {
            ACCEPTED_TYPES
                .iter()
                .copied()
                .find(|accepted| *accepted == mime.essence_str())
        })
        .ok_or_else(|| {
            ApiError::InvalidUpload(format!(
                "{} is not a JPEG, PNG, WebP or PDF file",
                path.display()
            ))
        })
}

impl ApiClient {
    /// Upload a file to the asset host and return its public URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUpload`] for empty, oversized or unsupported
    /// files, [`ApiError::Io`] if the file cannot be read, or any transport /
    /// status / parse error from the asset host.
    pub async fn upload_asset(&self, upload_url: &str, path: &Path) -> Result<String, ApiError> {
        let metadata = tokio::fs::metadata(path).await?;
        let mime = check_upload(path, metadata.len())?;
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map_or_else(|| String::from("upload"), |name| name.to_string_lossy().into_owned());

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        tracing::debug!(upload_url, mime, size = metadata.len(), "uploading asset");
        let resp = check_response(self.upload_request(upload_url, form).send().await?).await?;
        let uploaded: UploadResponse = decode(resp).await?;
        Ok(uploaded.url)
    }

    /// The asset host is a separate origin: it never receives the API session.
    fn upload_request(
        &self,
        upload_url: &str,
        form: reqwest::multipart::Form,
    ) -> reqwest::RequestBuilder {
        let url = format!("{}/upload", upload_url.trim_end_matches('/'));
        self.http.post(url).multipart(form)
    }

    /// Attach an uploaded receipt to an order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown order, or any transport /
    /// status / parse error.
    pub async fn submit_payment_proof(
        &self,
        order_id: &str,
        asset_url: &str,
    ) -> Result<PaymentProof, ApiError> {
        let path = format!("/orders/{}/payment-proof", urlencoding::encode(order_id));
        let body = SubmitProof { url: asset_url };
        let resp = check_response(self.post(&path).json(&body).send().await?).await?;
        decode(resp).await
    }

    /// Approve or reject a payment proof (admin).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] without an admin session,
    /// [`ApiError::NotFound`] for an unknown proof, or any transport error.
    pub async fn review_payment_proof(
        &self,
        proof_id: &str,
        review: &ProofReview,
    ) -> Result<PaymentProof, ApiError> {
        let path = format!("/payment-proofs/{}", urlencoding::encode(proof_id));
        let resp = check_response(self.patch(&path).json(review).send().await?).await?;
        decode(resp).await
    }
}
