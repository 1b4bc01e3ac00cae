use super::*;
use crate::http::RequestBody;
use crate::test_support::{harness, question_json};
use futures::executor::block_on;

#[test]
fn list_path_carries_paging() {
    assert_eq!(list_path(20, 10), "/api/v1/questions/?skip=20&limit=10");
}

#[test]
fn list_questions_decodes_page() {
    let h = harness();
    h.transport.respond_json(
        200,
        serde_json::json!({ "data": [question_json(1, "a"), question_json(2, "b")], "total": 30 }),
    );
    let page = block_on(list_questions(&h.client, 0, DEFAULT_PAGE_SIZE)).unwrap();
    assert_eq!(page.total, 30);
    assert_eq!(page.data[1].content, "b");
    assert_eq!(h.transport.last_request().url, "/api/v1/questions/?skip=0&limit=10");
}

#[test]
fn get_question_unwraps_data_envelope() {
    let h = harness();
    h.transport.respond_json(200, serde_json::json!({ "data": question_json(3, "c") }));
    let question = block_on(get_question(&h.client, 3)).unwrap();
    assert_eq!(question.id, 3);
    assert_eq!(h.transport.last_request().url, "/api/v1/questions/3");
}

#[test]
fn create_question_sends_only_set_fields() {
    let h = harness();
    h.transport.respond_json(200, question_json(8, "x^2"));
    let draft = QuestionDraft { content: Some("x^2".to_owned()), ..QuestionDraft::default() };
    let created = block_on(create_question(&h.client, &draft)).unwrap();

    assert_eq!(created.id, 8);
    let sent = h.transport.last_request();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.url, QUESTIONS_PATH);
    assert_eq!(sent.body, RequestBody::Json("{\"content\":\"x^2\"}".to_owned()));
}

#[test]
fn update_question_uses_put_on_item() {
    let h = harness();
    h.transport.respond_json(200, serde_json::json!({ "data": question_json(5, "new") }));
    let draft = QuestionDraft { remarks: Some("redo".to_owned()), ..QuestionDraft::default() };
    let updated = block_on(update_question(&h.client, 5, &draft)).unwrap();
    assert_eq!(updated.content, "new");
    let sent = h.transport.last_request();
    assert_eq!((sent.method, sent.url.as_str()), (Method::Put, "/api/v1/questions/5"));
}

#[test]
fn delete_question_uses_delete_on_item() {
    let h = harness();
    h.transport.respond_json(200, question_json(5, "gone"));
    block_on(delete_question(&h.client, 5)).unwrap();
    let sent = h.transport.last_request();
    assert_eq!((sent.method, sent.url.as_str()), (Method::Delete, "/api/v1/questions/5"));
}

#[test]
fn create_from_image_posts_multipart() {
    let h = harness();
    h.transport.respond_json(200, serde_json::json!({ "data": question_json(9, "ocr text") }));
    let file = UploadFile {
        file_name: "page.jpg".to_owned(),
        content_type: "image/jpeg".to_owned(),
        bytes: vec![0xff, 0xd8],
    };
    let question = block_on(create_from_image(&h.client, file)).unwrap();
    assert_eq!(question.content, "ocr text");
    let sent = h.transport.last_request();
    assert_eq!(sent.url, FROM_IMAGE_PATH);
    assert!(matches!(sent.body, RequestBody::Multipart { .. }));
}
