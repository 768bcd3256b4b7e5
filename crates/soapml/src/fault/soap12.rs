//! SOAP 1.2 fault shape

use super::{FaultBody, FaultCode, FaultReason, FaultScope, write_detail};
use crate::content::Section;
use crate::escape::{escape_attr, escape_text};
use crate::error::Result;
use crate::writer::XmlWriter;

/// SOAP 1.2 fault.
///
/// Renders prefixed `Code`, `Reason`, `Node`, `Role` (each only when set)
/// followed by a prefixed `Detail` wrapper.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Soap12Fault {
    code: Option<FaultCode>,
    reason: Option<FaultReason>,
    node: Option<String>,
    role: Option<String>,
    detail: Option<Section>,
}

impl FaultScope for Soap12Fault {
    fn detail(&mut self, block: impl FnOnce(&mut Section)) -> Result<()> {
        let mut detail = Section::new();
        block(&mut detail);
        self.detail = Some(detail);
        Ok(())
    }

    fn code(&mut self, value: impl Into<String>) -> Result<()> {
        let mut code = FaultCode::new();
        code.value(value);
        self.code = Some(code);
        Ok(())
    }

    fn code_with(&mut self, block: impl FnOnce(&mut FaultCode)) -> Result<()> {
        let mut code = FaultCode::new();
        block(&mut code);
        self.code = Some(code);
        Ok(())
    }

    fn reason(&mut self, block: impl FnOnce(&mut FaultReason)) -> Result<()> {
        let mut reason = FaultReason::new();
        block(&mut reason);
        self.reason = Some(reason);
        Ok(())
    }

    fn node(&mut self, node: impl Into<String>) -> Result<()> {
        self.node = Some(node.into());
        Ok(())
    }

    fn role(&mut self, role: impl Into<String>) -> Result<()> {
        self.role = Some(role.into());
        Ok(())
    }
}

impl FaultBody for Soap12Fault {
    fn write_body(&self, w: &mut XmlWriter<'_>, prefix: &str, depth: usize) {
        let value_tag = format!("{prefix}:Value");

        if let Some(code) = &self.code {
            let tag = format!("{prefix}:Code");
            w.open(depth, &tag);
            if let Some(value) = code.primary() {
                w.text_element(depth + 1, &value_tag, value);
            }
            write_subcodes(w, code.subcodes(), prefix, depth + 1);
            w.close(depth, &tag);
        }

        if let Some(reason) = &self.reason {
            let tag = format!("{prefix}:Reason");
            w.open(depth, &tag);
            w.pad(depth + 1);
            w.push(&format!(
                "<{prefix}:Text xml:lang=\"{}\">{}</{prefix}:Text>",
                escape_attr(reason.lang_or_default()),
                escape_text(reason.text_value().unwrap_or_default()),
            ));
            w.newline();
            w.close(depth, &tag);
        }

        if let Some(node) = &self.node {
            w.text_element(depth, &format!("{prefix}:Node"), node);
        }
        if let Some(role) = &self.role {
            w.text_element(depth, &format!("{prefix}:Role"), role);
        }
        write_detail(self.detail.as_ref(), w, &format!("{prefix}:Detail"), depth);
    }
}

/// Renders the head as a `Subcode` and recurses on the tail inside it, so
/// the chain comes out strictly nested.
fn write_subcodes(w: &mut XmlWriter<'_>, subcodes: &[String], prefix: &str, depth: usize) {
    let Some((head, tail)) = subcodes.split_first() else {
        return;
    };
    let tag = format!("{prefix}:Subcode");
    w.open(depth, &tag);
    w.text_element(depth + 1, &format!("{prefix}:Value"), head);
    write_subcodes(w, tail, prefix, depth + 1);
    w.close(depth, &tag);
}
