//! VUI request parsing, classification and canned response synthesis.

use std::borrow::Cow;

use chrono::NaiveDate;
use encoding_rs::{Encoding, UTF_8};
use quick_xml::events::Event;
use quick_xml::se::Serializer;
use quick_xml::Reader;
use serde::Serialize;
use thiserror::Error;

use crate::vui::schema::{
    AliQueryRequest, AliQueryResponse, AliUpdateRequest, AliUpdateResponse, Header,
    ResponseBody, ResultCode, Trailer, TypeCode, VuiRequest, VuiResponse, ROOT,
};

/// Protocol version stamped on every response.
pub const VERSION: &str = "1.0";

/// `REC` value of response headers and trailers.
pub const RECORD_FLAG: &str = "1";

/// Key type reported back for updates.
pub const UPDATE_KEY_TYPE: &str = "OTHER";

/// Fixed address record returned for every query.
pub mod canned {
    pub const HNO: &str = "0000006080";
    pub const STN: &str = "TENNYSON PKWY";
    pub const MCN: &str = "PLANO";
    pub const STA: &str = "TX";
    pub const LOC: &str = "SUITE 400";
    pub const NAM: &str = "ENTITLEMENT";
    pub const CLS_TYPE: &str = "F";
    pub const TYS_TYPE: &str = "0";
    pub const ESN: &str = "00888";
    pub const CPF: &str = "HPE";
    pub const ZIP: &str = "75024";
    pub const ALT: &str = "0000000000";

    pub const QUERY_RC: &str = "0";
    pub const UPDATE_RC: &str = "000";
    pub const SUCCESS: &str = "SUCCESS";
}

/// Format of the `CPD` date stamp.
const DATE_FORMAT: &str = "%Y-%m-%d";

const QUERY_KEY_PATH: [&str; 4] = [ROOT, "Payload", "ALIQueryRequest", "ExternalKey"];
const UPDATE_KEY_PATH: [&str; 4] = [ROOT, "Payload", "ALIUpdateRequest", "ExternalKey"];

/// Errors raised while producing a response document.
#[derive(Debug, Error)]
pub enum VuiError {
    #[error("XML serialization failed: {0}")]
    Serialize(#[from] quick_xml::SeError),
}

/// A classified request: which arm of the payload drives the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation<'a> {
    Query(&'a AliQueryRequest),
    Update(&'a AliUpdateRequest),
}

impl Operation<'_> {
    pub fn external_key(&self) -> &str {
        match self {
            Operation::Query(q) => &q.external_key,
            Operation::Update(u) => &u.external_key,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Query(_) => "query",
            Operation::Update(_) => "update",
        }
    }
}

impl VuiRequest {
    /// Pick the payload arm with a non-empty external key, query first.
    ///
    /// Returns `None` when neither arm carries a key.
    pub fn classify(&self) -> Option<Operation<'_>> {
        if let Some(query) = self.payload.query.as_ref().filter(|q| !q.external_key.is_empty()) {
            return Some(Operation::Query(query));
        }
        self.payload
            .update
            .as_ref()
            .filter(|u| !u.external_key.is_empty())
            .map(Operation::Update)
    }
}

/// Parse a request body, falling back to an empty envelope on any error.
pub fn parse_request(body: &[u8]) -> VuiRequest {
    let text = decode_body(body);
    tracing::debug!(body = %text, "VUI request body received");

    match root_element(&text) {
        Some(name) if name == ROOT => {}
        other => {
            tracing::debug!(root = ?other, "VUI request body has no VUI root element");
            return VuiRequest::default();
        }
    }

    let mut request: VuiRequest = match quick_xml::de::from_str(&text) {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!(error = %e, "Failed to parse VUI request body");
            return VuiRequest::default();
        }
    };

    // The deserializer trims text; keys are compared and echoed as sent.
    if let Some(query) = request.payload.query.as_mut() {
        if let Some(key) = verbatim_text(&text, &QUERY_KEY_PATH) {
            query.external_key = key;
        }
    }
    if let Some(update) = request.payload.update.as_mut() {
        if let Some(key) = verbatim_text(&text, &UPDATE_KEY_PATH) {
            update.external_key = key;
        }
    }
    request
}

/// Character data directly inside the first element at `path`, untrimmed.
fn verbatim_text(text: &str, path: &[&str]) -> Option<String> {
    let mut reader = Reader::from_str(text);
    let mut stack: Vec<String> = Vec::new();
    let mut collected: Option<String> = None;
    let at_path = |stack: &[String]| stack.iter().map(String::as_str).eq(path.iter().copied());

    loop {
        match reader.read_event().ok()? {
            Event::Start(e) => {
                stack.push(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
                if at_path(&stack) {
                    collected = Some(String::new());
                }
            }
            Event::Text(t) if at_path(&stack) => {
                if let Some(buf) = collected.as_mut() {
                    buf.push_str(&t.unescape().ok()?);
                }
            }
            Event::CData(c) if at_path(&stack) => {
                if let Some(buf) = collected.as_mut() {
                    buf.push_str(&String::from_utf8_lossy(&c));
                }
            }
            Event::End(_) => {
                if at_path(&stack) {
                    return collected;
                }
                stack.pop();
            }
            Event::Eof => return None,
            _ => {}
        }
    }
}

/// Decode a body to text using the charset from a BOM or the XML declaration.
pub fn decode_body(body: &[u8]) -> Cow<'_, str> {
    let encoding = declared_encoding(body).unwrap_or(UTF_8);
    let (text, used, had_errors) = encoding.decode(body);
    if had_errors {
        tracing::debug!(encoding = used.name(), "VUI request body contained malformed sequences");
    }
    text
}

/// Charset label from `<?xml ... encoding="..."?>`, if one is declared and known.
fn declared_encoding(body: &[u8]) -> Option<&'static Encoding> {
    let mut reader = Reader::from_reader(body);
    loop {
        match reader.read_event() {
            Ok(Event::Decl(decl)) => {
                let label = decl.encoding()?.ok()?;
                return Encoding::for_label(&label);
            }
            Ok(Event::Text(_)) | Ok(Event::Comment(_)) => continue,
            _ => return None,
        }
    }
}

/// Local name of the first element in the document.
fn root_element(text: &str) -> Option<String> {
    let mut reader = Reader::from_str(text);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Some(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
            }
            Ok(Event::Eof) | Err(_) => return None,
            Ok(_) => continue,
        }
    }
}

/// Build the canned response for a classified request.
pub fn synthesize(operation: Operation<'_>, today: NaiveDate) -> VuiResponse {
    let body = match operation {
        Operation::Query(request) => ResponseBody::Query(query_response(request, today)),
        Operation::Update(request) => ResponseBody::Update(update_response(request)),
    };

    VuiResponse {
        ver: VERSION.to_string(),
        hdr: Header {
            rec: RECORD_FLAG.to_string(),
            ..Header::default()
        },
        payload: body.into(),
        trl: Trailer {
            rec: RECORD_FLAG.to_string(),
        },
    }
}

fn query_response(request: &AliQueryRequest, today: NaiveDate) -> AliQueryResponse {
    AliQueryResponse {
        ver: VERSION.to_string(),
        rc1: ResultCode::new(canned::QUERY_RC, canned::SUCCESS),
        external_key: request.external_key.clone(),
        hno: canned::HNO.to_string(),
        stn: canned::STN.to_string(),
        mcn: canned::MCN.to_string(),
        sta: canned::STA.to_string(),
        loc: canned::LOC.to_string(),
        nam: canned::NAM.to_string(),
        cls: Some(TypeCode::new(canned::CLS_TYPE)),
        tys: Some(TypeCode::new(canned::TYS_TYPE)),
        esn: canned::ESN.to_string(),
        cpd: today.format(DATE_FORMAT).to_string(),
        coi: String::new(),
        cpf: canned::CPF.to_string(),
        zip: canned::ZIP.to_string(),
        alt: canned::ALT.to_string(),
    }
}

fn update_response(request: &AliUpdateRequest) -> AliUpdateResponse {
    AliUpdateResponse {
        ver: VERSION.to_string(),
        external_key: request.external_key.clone(),
        external_key_type: UPDATE_KEY_TYPE.to_string(),
        rc1: ResultCode::new(canned::UPDATE_RC, canned::SUCCESS),
    }
}

/// Serialize a response document with one-space indentation.
pub fn to_xml(response: &VuiResponse) -> Result<String, VuiError> {
    let mut xml = String::new();
    let mut ser = Serializer::new(&mut xml);
    ser.indent(' ', 1);
    response.serialize(ser)?;
    Ok(xml)
}
