//! VUI wire format.
//!
//! Element and attribute names follow the XML exactly; `@`-prefixed serde
//! names are attributes and `$text` is character data. Empty strings are
//! omitted on output.

use serde::{Deserialize, Serialize};

/// Root element name of every VUI document.
pub const ROOT: &str = "VUI";

fn is_empty(s: &str) -> bool {
    s.is_empty()
}

/// `HDR` block shared by requests and responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Header {
    #[serde(rename = "Acct", skip_serializing_if = "is_empty")]
    pub acct: String,
    #[serde(rename = "ClientVersion", skip_serializing_if = "is_empty")]
    pub client_version: String,
    #[serde(rename = "REC", skip_serializing_if = "is_empty")]
    pub rec: String,
}

/// `TRL` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Trailer {
    #[serde(rename = "REC", skip_serializing_if = "is_empty")]
    pub rec: String,
}

/// Wrapper for the `CLS/TYP` and `TYS/TYP` classification codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TypeCode {
    #[serde(rename = "TYP")]
    pub typ: String,
}

impl TypeCode {
    pub fn new(typ: impl Into<String>) -> Self {
        Self { typ: typ.into() }
    }
}

/// `RC1`: protocol status code with a human readable message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ResultCode {
    #[serde(rename = "@message", skip_serializing_if = "is_empty")]
    pub message: String,
    #[serde(rename = "$text")]
    pub code: String,
}

impl ResultCode {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
        }
    }
}

// Requests

/// Inbound `VUI` document.
///
/// Both payload arms are optional on the wire; see
/// [`VuiRequest::classify`](crate::vui::engine) for how one is chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VuiRequest {
    #[serde(rename = "@ver")]
    pub ver: String,
    #[serde(rename = "HDR")]
    pub hdr: Header,
    #[serde(rename = "Payload")]
    pub payload: RequestPayload,
    #[serde(rename = "TRL")]
    pub trl: Trailer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RequestPayload {
    #[serde(rename = "ALIQueryRequest")]
    pub query: Option<AliQueryRequest>,
    #[serde(rename = "ALIUpdateRequest")]
    pub update: Option<AliUpdateRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AliQueryRequest {
    #[serde(rename = "@ver")]
    pub ver: String,
    #[serde(rename = "ExternalKey")]
    pub external_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AliUpdateRequest {
    #[serde(rename = "@FOC")]
    pub foc: String,
    #[serde(rename = "@ver")]
    pub ver: String,
    #[serde(rename = "ExternalKey")]
    pub external_key: String,
    #[serde(rename = "ExternalKeyType")]
    pub external_key_type: String,
    #[serde(rename = "HNO")]
    pub hno: String,
    #[serde(rename = "STN")]
    pub stn: String,
    #[serde(rename = "MCN")]
    pub mcn: String,
    #[serde(rename = "STA")]
    pub sta: String,
    #[serde(rename = "LOC")]
    pub loc: String,
    #[serde(rename = "NAM")]
    pub nam: String,
    #[serde(rename = "CLS")]
    pub cls: Option<TypeCode>,
    #[serde(rename = "TYS")]
    pub tys: Option<TypeCode>,
    #[serde(rename = "COI")]
    pub coi: String,
    #[serde(rename = "CPF")]
    pub cpf: String,
    #[serde(rename = "ZIP")]
    pub zip: String,
    #[serde(rename = "SubscriberID")]
    pub subscriber_id: String,
}

// Responses

/// Outbound `VUI` document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename = "VUI")]
pub struct VuiResponse {
    #[serde(rename = "@ver", default, skip_serializing_if = "is_empty")]
    pub ver: String,
    #[serde(rename = "HDR", default)]
    pub hdr: Header,
    #[serde(rename = "Payload")]
    pub payload: ResponsePayload,
    #[serde(rename = "TRL", default)]
    pub trl: Trailer,
}

/// The response arm, exactly one of query or update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    Query(AliQueryResponse),
    Update(AliUpdateResponse),
}

/// Wire form of [`ResponseBody`].
///
/// Only constructible from a [`ResponseBody`], so exactly one arm is ever set
/// on documents this crate produces.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResponsePayload {
    #[serde(rename = "ALIQueryResponse", default, skip_serializing_if = "Option::is_none")]
    query: Option<AliQueryResponse>,
    #[serde(rename = "ALIUpdateResponse", default, skip_serializing_if = "Option::is_none")]
    update: Option<AliUpdateResponse>,
}

impl ResponsePayload {
    pub fn query(&self) -> Option<&AliQueryResponse> {
        self.query.as_ref()
    }

    pub fn update(&self) -> Option<&AliUpdateResponse> {
        self.update.as_ref()
    }
}

impl From<ResponseBody> for ResponsePayload {
    fn from(body: ResponseBody) -> Self {
        match body {
            ResponseBody::Query(query) => Self {
                query: Some(query),
                update: None,
            },
            ResponseBody::Update(update) => Self {
                query: None,
                update: Some(update),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AliQueryResponse {
    #[serde(rename = "@ver", skip_serializing_if = "is_empty")]
    pub ver: String,
    #[serde(rename = "RC1")]
    pub rc1: ResultCode,
    #[serde(rename = "ExternalKey", skip_serializing_if = "is_empty")]
    pub external_key: String,
    #[serde(rename = "HNO", skip_serializing_if = "is_empty")]
    pub hno: String,
    #[serde(rename = "STN", skip_serializing_if = "is_empty")]
    pub stn: String,
    #[serde(rename = "MCN", skip_serializing_if = "is_empty")]
    pub mcn: String,
    #[serde(rename = "STA", skip_serializing_if = "is_empty")]
    pub sta: String,
    #[serde(rename = "LOC", skip_serializing_if = "is_empty")]
    pub loc: String,
    #[serde(rename = "NAM", skip_serializing_if = "is_empty")]
    pub nam: String,
    #[serde(rename = "CLS", skip_serializing_if = "Option::is_none")]
    pub cls: Option<TypeCode>,
    #[serde(rename = "TYS", skip_serializing_if = "Option::is_none")]
    pub tys: Option<TypeCode>,
    #[serde(rename = "ESN", skip_serializing_if = "is_empty")]
    pub esn: String,
    #[serde(rename = "CPD", skip_serializing_if = "is_empty")]
    pub cpd: String,
    #[serde(rename = "COI", skip_serializing_if = "is_empty")]
    pub coi: String,
    #[serde(rename = "CPF", skip_serializing_if = "is_empty")]
    pub cpf: String,
    #[serde(rename = "ZIP", skip_serializing_if = "is_empty")]
    pub zip: String,
    #[serde(rename = "ALT", skip_serializing_if = "is_empty")]
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AliUpdateResponse {
    #[serde(rename = "@ver", skip_serializing_if = "is_empty")]
    pub ver: String,
    #[serde(rename = "ExternalKey", skip_serializing_if = "is_empty")]
    pub external_key: String,
    #[serde(rename = "ExternalKeyType", skip_serializing_if = "is_empty")]
    pub external_key_type: String,
    #[serde(rename = "RC1")]
    pub rc1: ResultCode,
}
