use anyhow::Context;

/// Salted bcrypt hash, computed off the async executor
pub async fn hash_password(password: String, cost: u32) -> anyhow::Result<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .context("password hashing task failed")?
        .context("failed to hash password")
}

/// A malformed stored hash counts as a mismatch
pub async fn verify_password(password: String, hash: String) -> anyhow::Result<bool> {
    let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .context("password verification task failed")?;

    Ok(verified.unwrap_or(false))
}
