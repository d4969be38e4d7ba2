use super::*;

#[test]
fn notice_class_marks_errors() {
    let notice = Notice::Error("network error: HTTP 500".to_owned());
    assert_eq!(notice_class(Some(&notice)), "notice notice--error");
}

#[test]
fn notice_class_marks_info() {
    let notice = Notice::Info("saved c1".to_owned());
    assert_eq!(notice_class(Some(&notice)), "notice notice--info");
}

#[test]
fn notice_class_without_notice() {
    assert_eq!(notice_class(None), "notice");
}
