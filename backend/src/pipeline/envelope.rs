//! Result envelope shared by every operation and the pipeline itself.
//!
//! A server-side operation reduces its outcome to exactly one [`Envelope`]:
//! a status family, a human-readable message, and an optional payload.
//! Inbound adapters relay the envelope verbatim, so the wire shape is pinned
//! here and validated again on the way back in.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use utoipa::ToSchema;

/// Status family carried by an envelope.
///
/// Exactly three families exist; every operation outcome maps onto one of
/// them. The enum serialises to the bare integer so the wire format stays
/// `{"status": 200, ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvelopeStatus {
    /// The operation completed and produced a payload (200).
    Success,
    /// Validation or business-rule rejection (400).
    Rejected,
    /// Unexpected fault the pipeline or operation normalised (500).
    Faulted,
}

impl EnvelopeStatus {
    /// HTTP-style status code used on the wire.
    pub const fn code(self) -> u16 {
        match self {
            Self::Success => 200,
            Self::Rejected => 400,
            Self::Faulted => 500,
        }
    }

    /// Map a wire code back onto its family.
    pub fn from_code(code: u16) -> Result<Self, EnvelopeValidationError> {
        match code {
            200 => Ok(Self::Success),
            400 => Ok(Self::Rejected),
            500 => Ok(Self::Faulted),
            other => Err(EnvelopeValidationError::UnknownStatus(other)),
        }
    }
}

impl Serialize for EnvelopeStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.code())
    }
}

impl<'de> Deserialize<'de> for EnvelopeStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u16::deserialize(deserializer)?;
        Self::from_code(code).map_err(serde::de::Error::custom)
    }
}

/// Validation failures raised when assembling or decoding an [`Envelope`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeValidationError {
    /// Wire status code outside the three defined families.
    #[error("unknown envelope status code: {0}")]
    UnknownStatus(u16),
    /// Message blank once trimmed of whitespace.
    #[error("envelope message must not be blank")]
    BlankMessage,
    /// Successful envelopes must carry a payload.
    #[error("successful envelope is missing its data payload")]
    MissingData,
    /// Rejection and fault envelopes must not carry a payload.
    #[error("non-success envelope must not carry a data payload")]
    UnexpectedData,
}

/// Uniform result contract returned by operations and the pipeline.
///
/// ## Invariants
/// - `message` is non-empty once trimmed.
/// - `data` is `Some` iff `status` is [`EnvelopeStatus::Success`]. The
///   pipeline's own fault envelopes always carry `data: null`; a thrown
///   error value is never coerced into the payload slot.
///
/// # Examples
/// ```
/// use backend::pipeline::{Envelope, EnvelopeStatus};
///
/// let envelope = Envelope::success("Đăng nhập thành công", "ada");
/// assert_eq!(envelope.status(), EnvelopeStatus::Success);
/// assert_eq!(envelope.data(), Some(&"ada"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "EnvelopeDto<T>")]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: serde::de::DeserializeOwned"))]
pub struct Envelope<T> {
    #[schema(value_type = u16, example = 200)]
    status: EnvelopeStatus,
    #[schema(example = "Đăng nhập thành công")]
    message: String,
    data: Option<T>,
}

impl<T> Envelope<T> {
    /// Fallible constructor enforcing the envelope invariants.
    pub fn try_new(
        status: EnvelopeStatus,
        message: impl Into<String>,
        data: Option<T>,
    ) -> Result<Self, EnvelopeValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(EnvelopeValidationError::BlankMessage);
        }
        match (status, &data) {
            (EnvelopeStatus::Success, None) => Err(EnvelopeValidationError::MissingData),
            (EnvelopeStatus::Rejected | EnvelopeStatus::Faulted, Some(_)) => {
                Err(EnvelopeValidationError::UnexpectedData)
            }
            _ => Ok(Self {
                status,
                message,
                data,
            }),
        }
    }

    /// Success envelope (200) carrying a payload.
    ///
    /// # Panics
    /// Panics when `message` is blank; callers pass non-empty literals.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        match Self::try_new(EnvelopeStatus::Success, message, Some(data)) {
            Ok(envelope) => envelope,
            Err(err) => panic!("envelope constructors require valid parts: {err}"),
        }
    }

    /// Validation or business rejection envelope (400), `data: null`.
    ///
    /// # Panics
    /// Panics when `message` is blank; callers pass non-empty literals.
    pub fn rejection(message: impl Into<String>) -> Self {
        match Self::try_new(EnvelopeStatus::Rejected, message, None) {
            Ok(envelope) => envelope,
            Err(err) => panic!("envelope constructors require valid parts: {err}"),
        }
    }

    /// Unexpected-fault envelope (500), `data: null`.
    ///
    /// # Panics
    /// Panics when `message` is blank; callers pass non-empty literals.
    pub fn fault(message: impl Into<String>) -> Self {
        match Self::try_new(EnvelopeStatus::Faulted, message, None) {
            Ok(envelope) => envelope,
            Err(err) => panic!("envelope constructors require valid parts: {err}"),
        }
    }

    /// Status family of this envelope.
    pub const fn status(&self) -> EnvelopeStatus {
        self.status
    }

    /// Whether the envelope belongs to the success family.
    pub const fn is_success(&self) -> bool {
        matches!(self.status, EnvelopeStatus::Success)
    }

    /// Human-readable outcome description.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Payload reference; `None` for rejection and fault envelopes.
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Consume the envelope and return its payload.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct EnvelopeDto<T> {
    status: EnvelopeStatus,
    message: String,
    #[serde(default)]
    data: Option<T>,
}

impl<T> TryFrom<EnvelopeDto<T>> for Envelope<T> {
    type Error = EnvelopeValidationError;

    fn try_from(dto: EnvelopeDto<T>) -> Result<Self, Self::Error> {
        Self::try_new(dto.status, dto.message, dto.data)
    }
}
