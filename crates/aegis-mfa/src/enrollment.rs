//! Enrollment payload formatting — the `otpauth://` URI an
//! authenticator app consumes, and the QR image URL handed to the
//! external rendering service.

/// Build the `otpauth://totp/...` provisioning URI for an identity.
///
/// `label` is the user-facing account name (typically an email
/// address); `issuer` is shown alongside it in authenticator apps.
pub fn otpauth_uri(label: &str, secret_base32: &str, issuer: &str) -> String {
    let qualified = format!("{issuer}:{label}");
    format!(
        "otpauth://totp/{}?secret={}&issuer={}",
        urlencoding::encode(&qualified),
        secret_base32,
        urlencoding::encode(issuer),
    )
}

/// URL of a rendered QR image for an `otpauth://` URI.
///
/// The image itself is produced by the external QR service; this only
/// formats the request URL.
pub fn qr_image_url(otpauth_uri: &str) -> String {
    format!(
        "https://api.qrserver.com/v1/create-qr-code/?size=200x200&data={}",
        urlencoding::encode(otpauth_uri),
    )
}
