//! SOAP 1.2 fault codes

/// Fault code with a primary value and a chain of subcodes.
///
/// Each subcode nests one level inside the previous one:
///
/// ```text
/// <env:Code>
///   <env:Value>env:Sender</env:Value>
///   <env:Subcode>
///     <env:Value>ns:ValidationError</env:Value>
///     <env:Subcode>
///       <env:Value>ns:MissingField</env:Value>
///     </env:Subcode>
///   </env:Subcode>
/// </env:Code>
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaultCode {
    value: Option<String>,
    subcodes: Vec<String>,
}

impl FaultCode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the primary value: `env:VersionMismatch`, `env:MustUnderstand`,
    /// `env:DataEncodingUnknown`, `env:Sender` or `env:Receiver`
    pub fn value(&mut self, code: impl Into<String>) {
        self.value = Some(code.into());
    }

    pub fn value_ns(&mut self, namespace: &str, code: &str) {
        self.value(format!("{namespace}:{code}"));
    }

    /// Appends a subcode one level below the previous one
    pub fn subcode(&mut self, code: impl Into<String>) {
        self.subcodes.push(code.into());
    }

    pub fn subcode_ns(&mut self, namespace: &str, code: &str) {
        self.subcode(format!("{namespace}:{code}"));
    }

    pub fn primary(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Subcodes, outermost first
    pub fn subcodes(&self) -> &[String] {
        &self.subcodes
    }
}
