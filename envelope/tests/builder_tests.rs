use envelope::builder::ResponseBuilder;
use envelope::meta::MockMetaSource;
use envelope::responses::ApiResponse;
use envelope::status::ApiStatus;
use serde_json::json;

fn fixed_meta() -> MockMetaSource {
    let mut source = MockMetaSource::new();
    source
        .expect_timestamp()
        .returning(|| "2026-01-01T00:00:00Z".to_owned());
    source
        .expect_request_id()
        .returning(|| "req_000000000000".to_owned());
    source
}

#[test]
fn default_build_is_a_success_envelope() {
    let res = ResponseBuilder::<()>::default().build();

    assert!(res.success);
    assert_eq!(res.http_code, 200);
    assert_eq!(res.message, "Ok");
    assert!(res.payload.is_none());
    assert!(res.error.is_none());
    assert!(res.meta.is_some());
}

#[test]
fn success_carries_payload_and_no_error() {
    let res = ResponseBuilder::new(ApiStatus::CREATED)
        .payload(json!({ "id": 7 }))
        .build();

    assert!(res.success);
    assert_eq!(res.http_code, 201);
    assert_eq!(res.payload, Some(json!({ "id": 7 })));
    assert!(res.error.is_none());
}

#[test]
fn failure_drops_payload_even_when_supplied() {
    let res = ResponseBuilder::new(ApiStatus::FORBIDDEN)
        .payload(json!({ "leak": true }))
        .build();

    assert!(!res.success);
    assert_eq!(res.http_code, 403);
    assert!(res.payload.is_none());

    let error = res.error.expect("failure envelope must carry an error");
    assert_eq!(error.kind, "forbidden");
    assert!(error.details.is_none());
}

#[test]
fn failure_error_type_matches_resolved_code() {
    let res = ResponseBuilder::<()>::new("not_found")
        .error_details(json!({ "resource": "staff", "id": 42 }))
        .build();

    let error = res.error.expect("failure envelope must carry an error");
    assert_eq!(error.kind, "not_found");
    assert_eq!(error.details, Some(json!({ "resource": "staff", "id": 42 })));
}

#[test]
fn unresolvable_status_degrades_to_500_envelope() {
    let res = ResponseBuilder::<()>::new("definitely_not_a_status").build();

    assert!(!res.success);
    assert_eq!(res.http_code, 500);
    assert_eq!(res.message, "Internal Server Error");
    assert_eq!(res.error.unwrap().kind, "internal_server_error");
}

#[test]
fn explicit_message_is_used_verbatim() {
    let res = ResponseBuilder::<()>::new(503)
        .message("scheduler is draining")
        .build();

    assert_eq!(res.message, "scheduler is draining");
}

#[test]
fn default_message_is_derived_from_the_code() {
    let res = ResponseBuilder::<()>::new("too_many_requests").build();
    assert_eq!(res.message, "Too Many Requests");

    let res = ResponseBuilder::<()>::new(502).build();
    assert_eq!(res.message, "Bad Gateway");
}

#[test]
fn pagination_middle_page_has_both_neighbours() {
    let res = ResponseBuilder::<()>::new(200)
        .paginate(2, 10)
        .total_items(25)
        .build();

    let pagination = res.pagination.expect("pagination was requested");
    assert_eq!(pagination.total_items, 25);
    assert_eq!(pagination.total_pages, 3);
    assert!(pagination.has_next);
    assert!(pagination.has_prev);
}

#[test]
fn pagination_single_page_has_no_neighbours() {
    let res = ResponseBuilder::<()>::new(200)
        .paginate(1, 10)
        .total_items(5)
        .build();

    let pagination = res.pagination.expect("pagination was requested");
    assert_eq!(pagination.total_pages, 1);
    assert!(!pagination.has_next);
    assert!(!pagination.has_prev);
}

#[test]
fn pagination_exact_multiple_does_not_round_up() {
    let res = ResponseBuilder::<()>::new(200)
        .paginate(2, 10)
        .total_items(30)
        .build();

    assert_eq!(res.pagination.unwrap().total_pages, 3);
}

#[test]
fn pagination_total_defaults_to_zero_items() {
    let res = ResponseBuilder::<()>::new(200).paginate(1, 10).build();

    let pagination = res.pagination.expect("pagination was requested");
    assert_eq!(pagination.total_items, 0);
    assert_eq!(pagination.total_pages, 0);
    assert!(!pagination.has_next);
    assert!(!pagination.has_prev);
}

#[test]
fn pagination_zero_limit_is_the_documented_degenerate_case() {
    let res = ResponseBuilder::<()>::new(200)
        .paginate(2, 0)
        .total_items(50)
        .build();

    let pagination = res.pagination.expect("pagination was requested");
    assert_eq!(pagination.total_pages, 0);
    assert!(!pagination.has_next);
    // has_prev still reports the page position as given.
    assert!(pagination.has_prev);
}

#[test]
fn omitting_pagination_leaves_the_section_absent() {
    let res = ResponseBuilder::<()>::new(200).build();
    assert!(res.pagination.is_none());

    let body = serde_json::to_value(&res).unwrap();
    assert!(body.get("pagination").is_none());
}

#[test]
fn metadata_can_be_switched_off() {
    let res = ResponseBuilder::<()>::new(200).include_meta(false).build();
    assert!(res.meta.is_none());

    let body = serde_json::to_value(&res).unwrap();
    assert!(body.get("meta").is_none());
}

#[test]
fn supplied_request_id_overrides_the_generated_one() {
    let res = ResponseBuilder::<()>::new(200)
        .request_id("req_custom_abc")
        .build();

    let meta = res.meta.expect("metadata is on by default");
    assert_eq!(meta.request_id, "req_custom_abc");
}

#[test]
fn identical_inputs_and_sources_build_identical_envelopes() {
    let source = fixed_meta();

    let first = ResponseBuilder::new("ok")
        .payload(json!([1, 2, 3]))
        .paginate(1, 3)
        .total_items(3)
        .build_with(&source);
    let second = ResponseBuilder::new("ok")
        .payload(json!([1, 2, 3]))
        .paginate(1, 3)
        .total_items(3)
        .build_with(&source);

    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[test]
fn serialized_failure_has_error_channel_only() {
    let res = ResponseBuilder::<()>::new(404)
        .error_details(json!("no such route"))
        .build_with(&fixed_meta());

    let body = serde_json::to_value(&res).unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["http_code"], json!(404));
    assert_eq!(body["error"]["type"], json!("not_found"));
    assert_eq!(body["error"]["details"], json!("no such route"));
    assert!(body.get("payload").is_none());
    assert_eq!(body["meta"]["request_id"], json!("req_000000000000"));
    assert_eq!(body["meta"]["timestamp"], json!("2026-01-01T00:00:00Z"));
}

#[test]
fn serialized_success_has_payload_channel_only() {
    let res = ResponseBuilder::new(200)
        .payload(json!({ "name": "Alice" }))
        .include_meta(false)
        .build();

    let body = serde_json::to_value(&res).unwrap();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["payload"]["name"], json!("Alice"));
    assert!(body.get("error").is_none());
}

#[test]
fn ok_constructor_wraps_the_payload() {
    let res = ApiResponse::ok(json!({ "status": "OK" }));

    assert!(res.success);
    assert_eq!(res.http_code, 200);
    assert_eq!(res.payload, Some(json!({ "status": "OK" })));
}

#[test]
fn err_constructor_resolves_aliases() {
    let res = ApiResponse::<()>::err(429, "slow down");

    assert!(!res.success);
    assert_eq!(res.http_code, 429);
    assert_eq!(res.message, "slow down");
    assert_eq!(res.error.unwrap().kind, "too_many_requests");
}

#[test]
fn generated_metadata_has_the_expected_shape() {
    let res = ResponseBuilder::<()>::new(200).build();

    let meta = res.meta.expect("metadata is on by default");
    assert!(meta.request_id.starts_with("req_"));
    assert_eq!(meta.request_id.len(), "req_".len() + 12);
    // ISO-8601 with a date/time separator.
    assert!(meta.timestamp.contains('T'));
}
