//! Property-based tests for rendering
//!
//! These tests use proptest to verify:
//! 1. Escaping removes markup characters and is reversible
//! 2. Empty optional elements leave no trace, empty nillable ones render the nil marker
//! 3. Rendering an unchanged envelope is idempotent
//! 4. Subcodes always nest, never repeat as siblings

use proptest::prelude::*;
use soapml::{
    ElementHolder, EnvelopeBuilder, FaultScope, SoapComponent, SoapVersion, escape_attr,
    escape_text, soap_envelope,
};

fn unescape(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

fn arb_version() -> impl Strategy<Value = SoapVersion> {
    prop_oneof![Just(SoapVersion::V1_1), Just(SoapVersion::V1_2)]
}

/// Names carrying a marker that never occurs in the envelope scaffolding.
/// The suffix alphabet excludes `q` and `z` so the marker appears once.
fn arb_marked_name() -> impl Strategy<Value = String> {
    "[a-p]{1,8}".prop_map(|s| format!("ns:zq{s}"))
}

fn build_or_fail(
    version: SoapVersion,
    block: impl FnOnce(&mut soapml::BodyBuilder),
) -> Result<EnvelopeBuilder, TestCaseError> {
    soap_envelope(|env| {
        env.version(version);
        env.body(|body| {
            block(body);
            Ok(())
        })
    })
    .map_err(|err| TestCaseError::fail(format!("build failed: {err}")))
}

proptest! {
    #[test]
    fn escape_text_neutralizes_markup(s in ".*") {
        let escaped = escape_text(&s);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert_eq!(escaped.matches("&lt;").count(), s.matches('<').count());
        prop_assert_eq!(escaped.matches("&gt;").count(), s.matches('>').count());
        prop_assert_eq!(escaped.matches("&amp;").count(), s.matches('&').count());
        prop_assert_eq!(unescape(&escaped), s);
    }

    #[test]
    fn escape_attr_neutralizes_quotes(s in ".*") {
        let escaped = escape_attr(&s);
        prop_assert!(!escaped.contains('"'));
        prop_assert!(!escaped.contains('\''));
        prop_assert!(!escaped.contains('<'));
        prop_assert_eq!(unescape(&escaped), s);
    }

    #[test]
    fn text_content_round_trips(version in arb_version(), text in "[ -~]{0,40}") {
        let envelope = build_or_fail(version, |b| b.element("ns:value", |e| e.content(&text)))?;
        let xml = envelope.to_compact_string();
        let expected = format!("<ns:value>{}</ns:value>", escape_text(&text));
        prop_assert!(xml.contains(&expected));
    }

    #[test]
    fn empty_optional_is_omitted(version in arb_version(), name in arb_marked_name()) {
        let envelope = build_or_fail(version, |b| {
            b.element("ns:wrapper", |e| {
                e.element("ns:kept", |k| k.content(1));
                e.optional(name.as_str(), |_| {});
            });
        })?;
        prop_assert!(!envelope.to_compact_string().contains("zq"));
        prop_assert!(!envelope.to_pretty_string("  ").contains("zq"));
    }

    #[test]
    fn empty_nillable_renders_nil(version in arb_version(), name in arb_marked_name()) {
        let envelope = build_or_fail(version, |b| b.nillable(name.as_str(), |_| {}))?;
        let xml = envelope.to_compact_string();
        let expected = format!("<{name} xsi:nil=\"true\"/>");
        prop_assert_eq!(xml.matches(&expected).count(), 1);
        prop_assert_eq!(xml.matches(name.as_str()).count(), 1);
        prop_assert_eq!(xml.matches("zq").count(), 1);
    }

    #[test]
    fn nillable_name_with_repeated_marker_renders_once(version in arb_version()) {
        let envelope = build_or_fail(version, |b| b.nillable("ns:zqzq", |_| {}))?;
        let xml = envelope.to_compact_string();
        prop_assert_eq!(xml.matches("<ns:zqzq xsi:nil=\"true\"/>").count(), 1);
        prop_assert_eq!(xml.matches("ns:zqzq").count(), 1);
    }

    #[test]
    fn optional_with_content_is_kept(name in arb_marked_name(), text in "[a-z]{1,10}") {
        let envelope = build_or_fail(SoapVersion::V1_2, |b| {
            b.optional(name.as_str(), |e| e.content(&text));
        })?;
        let expected = format!("<{name}>{text}</{name}>");
        prop_assert!(envelope.to_compact_string().contains(&expected));
    }

    #[test]
    fn render_is_idempotent(
        version in arb_version(),
        items in prop::collection::vec("[ -~]{0,12}", 0..8),
        indent in prop_oneof![Just(" "), Just("  "), Just("\t")],
    ) {
        let envelope = build_or_fail(version, |b| {
            b.list("ns:items", |l| {
                for item in &items {
                    l.optional("ns:item", |e| {
                        if !item.is_empty() {
                            e.content(item);
                        }
                    });
                }
            });
        })?;
        prop_assert_eq!(envelope.to_compact_string(), envelope.to_compact_string());
        prop_assert_eq!(envelope.to_pretty_string(indent), envelope.to_pretty_string(indent));
        prop_assert!(envelope.to_pretty_string(indent).ends_with("</soapenv:Envelope>\n"));
    }

    #[test]
    fn subcodes_nest(subcodes in prop::collection::vec("[a-z]{1,6}", 0..6)) {
        let envelope = soap_envelope(|env| {
            env.envelope_prefix("env");
            env.fault(|f| {
                f.code_with(|c| {
                    c.value("env:Sender");
                    for subcode in &subcodes {
                        c.subcode(subcode.as_str());
                    }
                })
            })
        })
        .map_err(|err| TestCaseError::fail(format!("build failed: {err}")))?;

        let nested = subcodes.iter().rev().fold(String::new(), |inner, subcode| {
            format!("<env:Subcode><env:Value>{subcode}</env:Value>{inner}</env:Subcode>")
        });
        let expected = format!("<env:Code><env:Value>env:Sender</env:Value>{nested}</env:Code>");
        let xml = envelope.to_compact_string();
        prop_assert!(xml.contains(&expected));
        prop_assert_eq!(xml.matches("<env:Subcode>").count(), subcodes.len());
    }

    #[test]
    fn version_isolation(version in arb_version()) {
        let wrong = soap_envelope(|env| {
            env.version(version);
            env.fault(|f| match version {
                SoapVersion::V1_1 => f.code("env:Sender"),
                SoapVersion::V1_2 => f.fault_code("soap:Client"),
            })
        });
        prop_assert!(wrong.is_err());
    }
}
