//! End-to-end page lifecycle against the virtual scheduler

use std::task::Poll;

use gateway_landing_core::test_utils::{
    DeferredClipboard, FakeClipboard, FakeEnvironment, VirtualScheduler,
};
use gateway_landing_core::{
    ClipboardChain, CopyError, CopyStatus, LandingPage, Locale, SiteConfig, ViewportClass,
};

type TestPage = LandingPage<FakeEnvironment, VirtualScheduler>;

fn mount(env: FakeEnvironment, clipboard: ClipboardChain) -> (TestPage, VirtualScheduler) {
    let scheduler = VirtualScheduler::new();
    let page = LandingPage::mount(SiteConfig::default(), env, scheduler.clone(), clipboard)
        .expect("default config mounts");
    (page, scheduler)
}

#[test]
fn test_visit_from_chinese_phone() {
    let env = FakeEnvironment::new()
        .with_language("zh-CN")
        .with_width(390)
        .with_origin("https://gateway.example.cn");
    let (page, scheduler) = mount(env.clone(), ClipboardChain::new().with(FakeClipboard::working("async")));

    let snap = page.snapshot();
    assert_eq!(snap.locale, Locale::Zh);
    assert_eq!(snap.viewport, ViewportClass::Narrow);
    assert_eq!(snap.server_address, "https://gateway.example.cn");

    // two ticks, then the visitor picks an endpoint from the wheel
    scheduler.advance(6000);
    assert_eq!(page.snapshot().endpoint, "/v1/messages");
    page.select_endpoint(9);
    assert_eq!(page.snapshot().endpoint, "/v1/audio/speech");

    tokio_test::block_on(page.copy_server_address()).unwrap();
    assert_eq!(page.snapshot().status_message(), Some("已复制到剪贴板"));

    // rotating the phone to landscape
    env.resize_to(844);
    assert_eq!(page.snapshot().viewport, ViewportClass::Wide);

    scheduler.advance(1800);
    let snap = page.snapshot();
    assert_eq!(snap.status, None);
    assert_eq!(snap.endpoint_index, 9, "next tick is due at 9000");

    scheduler.advance(1200);
    assert_eq!(page.snapshot().endpoint_index, 10);

    page.unmount();
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(env.listener_count(), 0);
}

#[test]
fn test_status_keeps_locale_of_copy_time() {
    let (page, scheduler) = mount(
        FakeEnvironment::new(),
        ClipboardChain::new().with(FakeClipboard::working("async")),
    );

    tokio_test::block_on(page.copy_server_address()).unwrap();
    assert_eq!(page.snapshot().status_message(), Some("Copied to clipboard"));

    page.toggle_locale();
    let snap = page.snapshot();
    assert_eq!(snap.locale, Locale::Zh);
    assert_eq!(snap.status_message(), Some("Copied to clipboard"));

    // the next copy uses the new locale
    tokio_test::block_on(page.copy_server_address()).unwrap();
    assert_eq!(page.snapshot().status_message(), Some("已复制到剪贴板"));

    scheduler.advance(1800);
    assert_eq!(page.snapshot().status_message(), None);
}

#[test]
fn test_no_clipboard_anywhere() {
    let (page, scheduler) = mount(
        FakeEnvironment::new(),
        ClipboardChain::new()
            .with(FakeClipboard::unavailable("async"))
            .with(FakeClipboard::unavailable("legacy")),
    );

    let result = tokio_test::block_on(page.copy_server_address());
    assert_eq!(result, Err(CopyError::Unavailable));
    assert_eq!(page.snapshot().status, Some(CopyStatus::Failed));

    scheduler.advance(1800);
    assert_eq!(page.snapshot().status, None);
}

#[test]
fn test_legacy_fallback_copies_origin_fallback() {
    let legacy = FakeClipboard::working("legacy");
    let writes = legacy.writes();
    let (page, _) = mount(
        FakeEnvironment::new(),
        ClipboardChain::new()
            .with(FakeClipboard::unavailable("async"))
            .with(legacy),
    );

    tokio_test::block_on(page.copy_server_address()).unwrap();
    assert_eq!(*writes.borrow(), vec!["https://api.example.com".to_string()]);
}

#[test]
fn test_clipboard_resolving_after_unmount_is_ignored() {
    let deferred = DeferredClipboard::new();
    let (page, scheduler) = mount(FakeEnvironment::new(), ClipboardChain::new().with(deferred.clone()));

    let copier = page.clone();
    let mut task = tokio_test::task::spawn(async move { copier.copy_server_address().await });
    assert!(task.poll().is_pending());
    assert_eq!(deferred.started(), 1);

    page.unmount();
    deferred.resolve(Ok(()));
    assert!(task.is_woken());
    assert_eq!(task.poll(), Poll::Ready(Ok(())));

    assert_eq!(page.snapshot().status, None);
    assert_eq!(scheduler.pending(), 0, "no clear timer scheduled after unmount");
}

#[test]
fn test_clipboard_resolving_while_mounted_updates_status() {
    let deferred = DeferredClipboard::new();
    let (page, scheduler) = mount(FakeEnvironment::new(), ClipboardChain::new().with(deferred.clone()));

    let copier = page.clone();
    let mut task = tokio_test::task::spawn(async move { copier.copy_server_address().await });
    assert!(task.poll().is_pending());

    // a carousel tick can land while the write is pending
    scheduler.advance(3000);
    assert_eq!(page.snapshot().endpoint_index, 1);
    assert_eq!(page.snapshot().status, None);

    deferred.resolve(Err(CopyError::failed("NotAllowedError")));
    assert!(task.poll().is_ready());
    assert_eq!(page.snapshot().status, Some(CopyStatus::Failed));
}

#[test]
fn test_custom_config_drives_timers() {
    let config = SiteConfig::from_toml_str(
        r#"
        endpoints = ["/v1/chat/completions", "/v1/embeddings", "/v1/rerank"]
        carousel_interval_ms = 1000
        status_clear_ms = 500
        "#,
    )
    .unwrap();
    let scheduler = VirtualScheduler::new();
    let page = LandingPage::mount(
        config,
        FakeEnvironment::new(),
        scheduler.clone(),
        ClipboardChain::new().with(FakeClipboard::working("async")),
    )
    .unwrap();

    scheduler.advance(3000);
    assert_eq!(page.snapshot().endpoint_index, 0, "three ticks over three endpoints");

    tokio_test::block_on(page.copy_server_address()).unwrap();
    scheduler.advance(500);
    assert_eq!(page.snapshot().status, None);
}

#[test]
fn test_legacy_fallback_without_body_reports_failure() {
    let (page, _) = mount(
        FakeEnvironment::new(),
        ClipboardChain::new()
            .with(FakeClipboard::unavailable("async"))
            .with(FakeClipboard::failing("legacy", "document has no body")),
    );

    let result = tokio_test::block_on(page.copy_server_address());
    assert_eq!(result, Err(CopyError::failed("document has no body")));
    assert_eq!(page.snapshot().status, Some(CopyStatus::Failed));
    assert_eq!(page.snapshot().status_message(), Some("Failed to copy"));
}
