//! VUI query/update behaviour over real connections.

use chrono::Local;
use http2_mock::vui::VuiResponse;
use reqwest::StatusCode;

mod common;

const QUERY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<VUI ver="1.0">
 <HDR>
  <Acct>ACME</Acct>
  <ClientVersion>1.0</ClientVersion>
  <REC>1</REC>
 </HDR>
 <Payload>
  <ALIQueryRequest ver="1.0">
   <ExternalKey>ABC123</ExternalKey>
  </ALIQueryRequest>
 </Payload>
 <TRL>
  <REC>1</REC>
 </TRL>
</VUI>"#;

const UPDATE: &str = r#"<VUI ver="1.0">
 <HDR>
  <Acct>ACME</Acct>
 </HDR>
 <Payload>
  <ALIUpdateRequest FOC="C" ver="1.0">
   <ExternalKey>XYZ789</ExternalKey>
   <ExternalKeyType>TN</ExternalKeyType>
   <HNO>100</HNO>
   <STN>MAIN ST</STN>
   <MCN>DALLAS</MCN>
   <STA>TX</STA>
   <CLS><TYP>B</TYP></CLS>
   <ZIP>75201</ZIP>
  </ALIUpdateRequest>
 </Payload>
</VUI>"#;

fn parse(xml: &str) -> VuiResponse {
    quick_xml::de::from_str(xml).unwrap()
}

#[tokio::test]
async fn test_query_round_trip() {
    let server = common::start_server().await;
    let client = common::h2c_client();

    let before = Local::now().format("%Y-%m-%d").to_string();
    let res = client
        .post(server.url("/vui/VuiServlet"))
        .body(QUERY)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["content-type"], "text/xml");

    let doc = parse(&res.text().await.unwrap());
    assert_eq!(doc.ver, "1.0");
    assert_eq!(doc.hdr.rec, "1");
    assert_eq!(doc.trl.rec, "1");
    assert!(doc.payload.update().is_none());

    let q = doc.payload.query().unwrap();
    assert_eq!(q.ver, "1.0");
    assert_eq!(q.external_key, "ABC123");
    assert_eq!(q.rc1.code, "0");
    assert_eq!(q.rc1.message, "SUCCESS");
    assert_eq!(q.hno, "0000006080");
    assert_eq!(q.stn, "TENNYSON PKWY");
    assert_eq!(q.mcn, "PLANO");
    assert_eq!(q.sta, "TX");
    assert_eq!(q.loc, "SUITE 400");
    assert_eq!(q.nam, "ENTITLEMENT");
    assert_eq!(q.cls.as_ref().unwrap().typ, "F");
    assert_eq!(q.tys.as_ref().unwrap().typ, "0");
    assert_eq!(q.esn, "00888");
    assert_eq!(q.cpf, "HPE");
    assert_eq!(q.zip, "75024");
    assert_eq!(q.alt, "0000000000");

    // Date checked on both sides of the request to survive midnight.
    let after = Local::now().format("%Y-%m-%d").to_string();
    assert!(q.cpd == before || q.cpd == after, "CPD {}", q.cpd);
}

#[tokio::test]
async fn test_update_round_trip() {
    let server = common::start_server().await;
    let client = common::http1_client();

    let res = client
        .post(server.url("/vui/VuiServlet"))
        .body(UPDATE)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["content-type"], "text/xml");

    let doc = parse(&res.text().await.unwrap());
    assert!(doc.payload.query().is_none());

    let u = doc.payload.update().unwrap();
    assert_eq!(u.ver, "1.0");
    assert_eq!(u.external_key, "XYZ789");
    assert_eq!(u.external_key_type, "OTHER");
    assert_eq!(u.rc1.code, "000");
    assert_eq!(u.rc1.message, "SUCCESS");
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let server = common::start_server().await;
    let client = common::http1_client();

    let mut bodies = Vec::new();
    for _ in 0..2 {
        let res = client
            .post(server.url("/vui/VuiServlet"))
            .body(UPDATE)
            .send()
            .await
            .unwrap();
        bodies.push(res.text().await.unwrap());
    }
    assert_eq!(bodies[0], bodies[1]);
}

#[tokio::test]
async fn test_unclassifiable_request() {
    let server = common::start_server().await;
    let client = common::http1_client();

    let body = r#"<VUI ver="1.0"><Payload><ALIQueryRequest><ExternalKey></ExternalKey></ALIQueryRequest></Payload></VUI>"#;
    let res = client
        .post(server.url("/vui/VuiServlet"))
        .body(body)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.text().await.unwrap(), "");
}

#[tokio::test]
async fn test_wrong_method() {
    let server = common::start_server().await;
    let client = common::http1_client();

    let res = client.get(server.url("/vui/VuiServlet")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(res.text().await.unwrap(), "");
}
