use contracts::envelope::Envelope;
use contracts::system::auth::{LoginRequest, LoginSession};

use crate::shared::http::{self, ApiResult};

pub async fn login(username: String, password: String) -> ApiResult<LoginSession> {
    let request = LoginRequest { username, password };
    let envelope: Envelope<LoginSession> = http::post_json("/auth/login", &request).await?;
    Ok(envelope.content)
}
