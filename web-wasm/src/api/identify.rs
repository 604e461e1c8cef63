//! 識別サービス呼び出し（fetch + FormData）

use crate::files::WebFile;
use movie_id_common::{classify, FlowError, FlowOutcome, MediaFile, UploadConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

/// 画像を送信し、レスポンスを分類する
///
/// fetch自体の失敗（ネットワーク断など）はTransportとして扱う。
pub async fn identify(config: &UploadConfig, files: &[WebFile]) -> FlowOutcome {
    match post_files(config, files).await {
        Ok((status, body)) => classify(status, &body),
        Err(e) => {
            gloo::console::error!(format!("identify request failed: {:?}", e));
            Err(FlowError::Transport(format!("{:?}", e)))
        }
    }
}

/// multipart本文を組み立てる（1ファイル1パート、ファイル名を保持）
fn build_form(field_name: &str, files: &[WebFile]) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    for file in files {
        form.append_with_blob_and_filename(field_name, file.file(), file.name())?;
    }
    Ok(form)
}

async fn post_files(config: &UploadConfig, files: &[WebFile]) -> Result<(u16, String), JsValue> {
    let form = build_form(&config.field_name, files)?;

    // Content-Type はブラウザが boundary 付きで設定する
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(&config.endpoint, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let body = JsFuture::from(resp.text()?).await?;
    Ok((resp.status(), body.as_string().unwrap_or_default()))
}
