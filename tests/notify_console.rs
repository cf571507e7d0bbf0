// tests/notify_console.rs
use feed_listener::notify::console::{render_alert, ConsoleNotifier};
use feed_listener::notify::templates::pick_template;
use feed_listener::{Entry, Notifier};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn entry() -> Entry {
    Entry::new(
        "t3_abc123",
        "New passive income app for Android",
        "https://www.reddit.com/r/passiveincome/comments/abc123/",
    )
    .with_category("passiveincome")
}

#[test]
fn single_template_alert_has_exact_layout() {
    let mut n = ConsoleNotifier::new(
        Vec::<u8>::new(),
        StdRng::seed_from_u64(1),
        vec!["[Reply Draft 1]\nTry DiSensor.".to_string()],
    );
    n.notify(&entry(), &["passive income app".to_string()]);

    let out = String::from_utf8(n.writer().clone()).unwrap();
    let expected = "\n\
==================================================\n\
OPPORTUNITY DETECTED! [Keywords: passive income app]\n\
Category: passiveincome\n\
Title: New passive income app for Android\n\
Link: https://www.reddit.com/r/passiveincome/comments/abc123/\n\
--------------------\n\
Suggested Action: Post this reply:\n\
[Reply Draft 1]\n\
Try DiSensor.\n\
==================================================\n\
\n";
    assert_eq!(out, expected);
}

#[test]
fn seeded_rng_makes_the_chosen_template_reproducible() {
    let templates: Vec<String> = (1..=5).map(|i| format!("[Reply Draft {i}]")).collect();
    let matched = vec!["depin".to_string(), "helium mobile".to_string()];

    let mut n = ConsoleNotifier::new(Vec::<u8>::new(), StdRng::seed_from_u64(99), templates.clone());
    n.notify(&entry(), &matched);
    n.notify(&entry(), &matched);

    let mut rng = StdRng::seed_from_u64(99);
    let mut expected = String::new();
    for _ in 0..2 {
        expected.push_str(&render_alert(
            &entry(),
            &matched,
            pick_template(&templates, &mut rng),
        ));
    }

    assert_eq!(String::from_utf8(n.writer().clone()).unwrap(), expected);
    assert!(expected.contains("[Keywords: depin, helium mobile]"));
}

#[test]
fn entry_without_category_shows_unknown() {
    let e = Entry::new("t3_jkl012", "Side hustle math", "https://x.test/");
    let mut n = ConsoleNotifier::new(Vec::<u8>::new(), StdRng::seed_from_u64(5), vec![]);
    n.notify(&e, &["side hustle".to_string()]);

    let out = String::from_utf8(n.writer().clone()).unwrap();
    assert!(out.contains("Category: Unknown\n"));
    assert!(out.contains("(no reply templates configured)"));
}
