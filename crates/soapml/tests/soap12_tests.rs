use soapml::{
    BodyContent, ElementHolder, EnvelopeBuilder, ErrorKind, Fault, FaultScope, SoapComponent,
    SoapVersion, soap_envelope,
};

const SOAP12_NS: &str = "http://www.w3.org/2003/05/soap-envelope";

#[test]
fn test_minimal_fault_pretty() -> Result<(), Box<dyn std::error::Error>> {
    let envelope = soap_envelope(|env| {
        env.version(SoapVersion::V1_2).envelope_prefix("env");
        env.fault(|f| {
            f.code("env:Receiver")?;
            f.reason(|r| r.text("Internal ghost registry unavailable"))
        })
    })?;

    let expected = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <env:Envelope xmlns:env=\"{SOAP12_NS}\">\n\
         \x20 <env:Body>\n\
         \x20   <env:Fault>\n\
         \x20     <env:Code>\n\
         \x20       <env:Value>env:Receiver</env:Value>\n\
         \x20     </env:Code>\n\
         \x20     <env:Reason>\n\
         \x20       <env:Text xml:lang=\"en\">Internal ghost registry unavailable</env:Text>\n\
         \x20     </env:Reason>\n\
         \x20   </env:Fault>\n\
         \x20 </env:Body>\n\
         </env:Envelope>\n"
    );
    assert_eq!(envelope.to_pretty_string("  "), expected);
    Ok(())
}

#[test]
fn test_default_version_and_prefix() {
    let envelope = EnvelopeBuilder::new();
    assert_eq!(envelope.soap_version(), SoapVersion::V1_2);
    assert!(envelope
        .to_compact_string()
        .contains(&format!("<soapenv:Envelope xmlns:soapenv=\"{SOAP12_NS}\">")));
}

#[test]
fn test_sender_fault_with_subcode_node_role_detail() -> Result<(), Box<dyn std::error::Error>> {
    let envelope = soap_envelope(|env| {
        env.envelope_prefix("env");
        env.namespaces(|ns| ns.prefix("ns", "urn:ghost"));
        env.fault(|f| {
            f.code_with(|c| {
                c.value("env:Sender");
                c.subcode_ns("ns", "InvalidGhostType");
            })?;
            f.reason(|r| {
                r.text("Unknown ghost type");
                r.lang("en-US");
            })?;
            f.node("http://example.com/ghost/validator")?;
            f.role("http://www.w3.org/2003/05/soap-envelope/role/ultimateReceiver")?;
            f.detail(|d| {
                d.element("ns:providedType", |e| e.content("friendly"));
                d.list("ns:validTypes", |l| {
                    l.element("ns:type", |e| e.content("Poltergeist"));
                    l.element("ns:type", |e| e.content("Banshee"));
                });
            })
        })
    })?;

    assert_eq!(
        envelope.to_compact_string(),
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <env:Envelope xmlns:env=\"{SOAP12_NS}\" xmlns:ns=\"urn:ghost\"><env:Body><env:Fault>\
             <env:Code><env:Value>env:Sender</env:Value>\
             <env:Subcode><env:Value>ns:InvalidGhostType</env:Value></env:Subcode></env:Code>\
             <env:Reason><env:Text xml:lang=\"en-US\">Unknown ghost type</env:Text></env:Reason>\
             <env:Node>http://example.com/ghost/validator</env:Node>\
             <env:Role>http://www.w3.org/2003/05/soap-envelope/role/ultimateReceiver</env:Role>\
             <env:Detail><ns:providedType>friendly</ns:providedType>\
             <ns:validTypes><ns:type>Poltergeist</ns:type><ns:type>Banshee</ns:type></ns:validTypes>\
             </env:Detail></env:Fault></env:Body></env:Envelope>"
        )
    );
    Ok(())
}

#[test]
fn test_subcodes_nest_strictly() -> Result<(), Box<dyn std::error::Error>> {
    let envelope = soap_envelope(|env| {
        env.envelope_prefix("env");
        env.fault(|f| {
            f.code_with(|c| {
                c.value("env:Sender");
                c.subcode("a");
                c.subcode("b");
                c.subcode("c");
            })
        })
    })?;

    let xml = envelope.to_compact_string();
    assert!(xml.contains(
        "<env:Subcode><env:Value>a</env:Value>\
         <env:Subcode><env:Value>b</env:Value>\
         <env:Subcode><env:Value>c</env:Value></env:Subcode>\
         </env:Subcode></env:Subcode>"
    ));
    assert_eq!(xml.matches("<env:Subcode>").count(), 3);
    assert!(!xml.contains("</env:Subcode><env:Subcode>"));
    Ok(())
}

#[test]
fn test_deeply_nested_body() -> Result<(), Box<dyn std::error::Error>> {
    let envelope = soap_envelope(|env| {
        env.envelope_prefix("env");
        env.body(|body| {
            body.element("l1", |a| {
                a.element("l2", |b| {
                    b.element("l3", |c| {
                        c.element("l4", |d| d.content("deep"));
                    });
                });
            });
            Ok(())
        })
    })?;

    assert!(envelope.to_pretty_string("  ").contains(
        "    <l1>\n\
         \x20     <l2>\n\
         \x20       <l3>\n\
         \x20         <l4>deep</l4>\n\
         \x20       </l3>\n\
         \x20     </l2>\n\
         \x20   </l1>\n"
    ));
    Ok(())
}

#[test]
fn test_body_after_fault_is_duplicate() {
    let result = soap_envelope(|env| {
        env.fault(|f| f.code("env:Receiver"))?;
        env.body(|_| Ok(()))
    });
    assert_eq!(
        result.err().map(|e| e.kind().clone()),
        Some(ErrorKind::DuplicateBody)
    );
}

#[test]
fn test_fault_after_body_is_duplicate() {
    let result = soap_envelope(|env| {
        env.body(|b| {
            b.element("a", |_| {});
            Ok(())
        })?;
        env.fault(|f| f.code("env:Receiver"))
    });
    assert_eq!(
        result.err().map(|e| e.kind().clone()),
        Some(ErrorKind::DuplicateBody)
    );
}

#[test]
fn test_first_body_survives_rejected_second() -> Result<(), Box<dyn std::error::Error>> {
    let mut envelope = EnvelopeBuilder::new();
    envelope.fault(|f| f.code("env:Receiver"))?;
    assert!(envelope.fault(|f| f.code("env:Sender")).is_err());
    let xml = envelope.to_compact_string();
    assert!(xml.contains("env:Receiver"));
    assert!(!xml.contains("env:Sender"));
    Ok(())
}

#[test]
fn test_soap11_operations_rejected() {
    for (method, result) in [
        ("fault_code", soap_envelope(|env| env.fault(|f| f.fault_code("soap:Server")))),
        ("fault_string", soap_envelope(|env| env.fault(|f| f.fault_string("boom")))),
        ("fault_actor", soap_envelope(|env| env.fault(|f| f.fault_actor("urn:a")))),
    ] {
        assert_eq!(
            result.err().map(|e| e.kind().clone()),
            Some(ErrorKind::VersionMismatch {
                method,
                required: SoapVersion::V1_1,
            })
        );
    }
}

#[test]
fn test_fault_variant_matches_version() -> Result<(), Box<dyn std::error::Error>> {
    let envelope = soap_envelope(|env| env.fault(|f| f.node("urn:node")))?;
    match envelope.body_content() {
        Some(BodyContent::Fault(fault @ Fault::V1_2(_))) => {
            assert_eq!(fault.version(), SoapVersion::V1_2);
        }
        other => return Err(format!("unexpected body: {other:?}").into()),
    }
    Ok(())
}

#[test]
fn test_render_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let envelope = soap_envelope(|env| {
        env.header(|h| h.element("ns:trace", |e| e.attribute("id", "t-1")));
        env.body(|body| {
            body.list("ns:ghosts", |l| l.element("ns:ghost", |g| g.content("Boo")));
            Ok(())
        })
    })?;
    assert_eq!(envelope.to_pretty_string("  "), envelope.to_pretty_string("  "));
    assert_eq!(envelope.to_compact_string(), envelope.to_compact_string());
    assert!(envelope
        .to_compact_string()
        .contains("<soapenv:Header><ns:trace id=\"t-1\"/></soapenv:Header>"));
    Ok(())
}
