use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use soapml::{
    ElementHolder, EnvelopeBuilder, Fault, FaultScope, Serializer, SoapVersion, soap_envelope,
};

#[derive(Debug, Parser)]
#[command(
    name = "soapml",
    version,
    about = "Render SOAP 1.1/1.2 response and fault envelopes"
)]
struct Args {
    #[command(subcommand)]
    command: Command,
    /// Render on a single line without indentation
    #[arg(long, global = true)]
    compact: bool,
    /// Indentation repeated once per nesting level
    #[arg(long, global = true, value_name = "STR", default_value = "  ")]
    indent: String,
    /// Output file (defaults to stdout)
    #[arg(short, long, global = true, value_name = "OUTPUT")]
    output: Option<PathBuf>,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Envelope whose body is a fault
    Fault(FaultArgs),
    /// Envelope whose body is a single response element
    Response(ResponseArgs),
}

#[derive(Debug, clap::Args)]
struct EnvelopeArgs {
    /// SOAP version (1.1 or 1.2)
    #[arg(long = "soap-version", value_name = "VERSION", default_value = "1.2")]
    soap_version: SoapVersion,
    /// Envelope namespace prefix
    #[arg(long, value_name = "PREFIX")]
    prefix: Option<String>,
    /// Extra namespace declaration, e.g. xmlns:ns=urn:example
    #[arg(long = "ns", value_name = "ATTR=URI", value_parser = parse_pair)]
    namespaces: Vec<(String, String)>,
}

#[derive(Debug, clap::Args)]
struct FaultArgs {
    #[command(flatten)]
    envelope: EnvelopeArgs,
    /// Fault code (faultcode in 1.1, Code/Value in 1.2)
    #[arg(long)]
    code: Option<String>,
    /// Fault message (faultstring in 1.1, Reason/Text in 1.2)
    #[arg(long)]
    message: Option<String>,
    /// Fault actor URI (1.1 only)
    #[arg(long)]
    actor: Option<String>,
    /// Nested subcode, outermost first (1.2 only)
    #[arg(long = "subcode", value_name = "CODE")]
    subcodes: Vec<String>,
    /// Reason language (1.2 only)
    #[arg(long)]
    lang: Option<String>,
    /// Node URI (1.2 only)
    #[arg(long)]
    node: Option<String>,
    /// Role URI (1.2 only)
    #[arg(long)]
    role: Option<String>,
    /// Detail entry
    #[arg(long = "detail", value_name = "NAME=TEXT", value_parser = parse_pair)]
    details: Vec<(String, String)>,
}

#[derive(Debug, clap::Args)]
struct ResponseArgs {
    #[command(flatten)]
    envelope: EnvelopeArgs,
    /// Name of the response element
    #[arg(long, value_name = "NAME")]
    element: String,
    /// Child element with text content
    #[arg(long = "field", value_name = "NAME=TEXT", value_parser = parse_pair)]
    fields: Vec<(String, String)>,
    /// Child element rendered as xsi:nil
    #[arg(long = "nil", value_name = "NAME")]
    nil_fields: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let envelope = match &args.command {
        Command::Fault(fault) => build_fault(fault),
        Command::Response(response) => build_response(response),
    }
    .context("failed to build envelope")?;

    let serializer = Serializer {
        pretty: !args.compact,
        indent: args.indent.clone(),
    };
    let xml = serializer.serialize(&envelope);
    debug!(bytes = xml.as_str().len(), "envelope serialized");

    write_output(&args.output, xml.as_str().as_bytes())?;
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();
}

fn envelope(
    args: &EnvelopeArgs,
    body: impl FnOnce(&mut EnvelopeBuilder) -> soapml::Result<()>,
) -> soapml::Result<EnvelopeBuilder> {
    soap_envelope(|env| {
        env.version(args.soap_version);
        if let Some(prefix) = &args.prefix {
            env.envelope_prefix(prefix.as_str());
        }
        env.namespaces(|ns| {
            for (attribute, uri) in &args.namespaces {
                ns.ns(attribute.as_str(), uri.as_str());
            }
        });
        body(env)
    })
}

fn build_fault(args: &FaultArgs) -> soapml::Result<EnvelopeBuilder> {
    envelope(&args.envelope, |env| env.fault(|fault| configure_fault(fault, args)))
}

/// `--code` and `--message` map onto the shape of the selected version; the
/// remaining flags call the version-specific operations directly, so a flag
/// of the other version is reported as a mismatch.
fn configure_fault(fault: &mut Fault, args: &FaultArgs) -> soapml::Result<()> {
    let soap11 = fault.version() == SoapVersion::V1_1;

    if soap11 {
        if let Some(code) = &args.code {
            fault.fault_code(code.as_str())?;
        }
        if let Some(message) = &args.message {
            fault.fault_string(message.as_str())?;
        }
    }
    if (!soap11 && args.code.is_some()) || !args.subcodes.is_empty() {
        fault.code_with(|c| {
            if let Some(code) = &args.code {
                c.value(code.as_str());
            }
            for subcode in &args.subcodes {
                c.subcode(subcode.as_str());
            }
        })?;
    }
    if (!soap11 && args.message.is_some()) || args.lang.is_some() {
        fault.reason(|r| {
            if let Some(message) = &args.message {
                r.text(message.as_str());
            }
            if let Some(lang) = &args.lang {
                r.lang(lang.as_str());
            }
        })?;
    }
    if let Some(actor) = &args.actor {
        fault.fault_actor(actor.as_str())?;
    }
    if let Some(node) = &args.node {
        fault.node(node.as_str())?;
    }
    if let Some(role) = &args.role {
        fault.role(role.as_str())?;
    }
    if !args.details.is_empty() {
        fault.detail(|detail| {
            for (name, text) in &args.details {
                detail.element(name.as_str(), |e| e.content(text));
            }
        })?;
    }
    Ok(())
}

fn build_response(args: &ResponseArgs) -> soapml::Result<EnvelopeBuilder> {
    envelope(&args.envelope, |env| {
        env.body(|body| {
            body.element(args.element.as_str(), |e| {
                for (name, text) in &args.fields {
                    e.element(name.as_str(), |field| field.content(text));
                }
                for name in &args.nil_fields {
                    e.nillable(name.as_str(), |_| {});
                }
            });
            Ok(())
        })
    })
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{s}`"))?;
    if key.is_empty() {
        return Err(format!("missing name in `{s}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

fn write_output(path: &Option<PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(data).context("failed to write stdout")?;
            Ok(())
        }
    }
}
