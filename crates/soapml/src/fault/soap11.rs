//! SOAP 1.1 fault shape

use super::{FaultBody, FaultScope, write_detail};
use crate::content::Section;
use crate::error::Result;
use crate::writer::XmlWriter;

/// SOAP 1.1 fault.
///
/// Renders unprefixed `faultcode`, `faultstring`, `faultactor` (each only
/// when set) followed by an unprefixed `detail` wrapper.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Soap11Fault {
    code: Option<String>,
    message: Option<String>,
    actor: Option<String>,
    detail: Option<Section>,
}

impl FaultScope for Soap11Fault {
    fn detail(&mut self, block: impl FnOnce(&mut Section)) -> Result<()> {
        let mut detail = Section::new();
        block(&mut detail);
        self.detail = Some(detail);
        Ok(())
    }

    fn fault_code(&mut self, code: impl Into<String>) -> Result<()> {
        self.code = Some(code.into());
        Ok(())
    }

    fn fault_string(&mut self, reason: impl Into<String>) -> Result<()> {
        self.message = Some(reason.into());
        Ok(())
    }

    fn fault_actor(&mut self, actor: impl Into<String>) -> Result<()> {
        self.actor = Some(actor.into());
        Ok(())
    }
}

impl FaultBody for Soap11Fault {
    fn write_body(&self, w: &mut XmlWriter<'_>, _prefix: &str, depth: usize) {
        if let Some(code) = &self.code {
            w.text_element(depth, "faultcode", code);
        }
        if let Some(message) = &self.message {
            w.text_element(depth, "faultstring", message);
        }
        if let Some(actor) = &self.actor {
            w.text_element(depth, "faultactor", actor);
        }
        write_detail(self.detail.as_ref(), w, "detail", depth);
    }
}
