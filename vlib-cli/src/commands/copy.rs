//! Implementation of the 'library.cp' subcommand.
//!
//! This module turns the connection flags into a `ClientConfig`, opens a REST
//! session and delegates the copy to vlib-core. The new item id is the only
//! thing written to stdout.

use crate::cli::{ClientArgs, CopyArgs};
use crate::error::{CliErrorContext, CliResult};
use crate::terminal;

use vlib_core::config::ClientConfigBuilder;
use vlib_core::{
    ClientConfig, CopyRequest, LibraryService, OperationContext, RestLibraryService,
    copy_library_item,
};

use std::io::{self, Write};
use std::time::Duration;

use log::debug;

/// Builds the REST client configuration from the global connection flags.
pub fn client_config(args: &ClientArgs) -> CliResult<ClientConfig> {
    let url = args
        .url
        .as_deref()
        .cli_context("no server URL: pass --url or set VLIB_URL")?;

    let mut builder = ClientConfigBuilder::new()
        .url(url)
        .insecure(args.insecure)
        .timeout(Duration::from_secs(args.timeout));
    if let Some(username) = &args.username {
        builder = builder.username(username.as_str());
    }
    if let Some(password) = &args.password {
        builder = builder.password(password.as_str());
    }
    if let Some(session) = &args.session {
        builder = builder.session_id(session.as_str());
    }
    builder.build()
}

/// Maps parsed arguments onto a core copy request.
pub fn copy_request(args: &CopyArgs) -> CopyRequest {
    CopyRequest {
        source: args.source.clone(),
        destination: args.destination.clone(),
        name: args.name.clone(),
    }
}

/// Runs the copy against `service` and writes the new item id to `out`.
pub fn run_copy<S, W>(
    ctx: &OperationContext,
    service: &S,
    args: &CopyArgs,
    out: &mut W,
) -> CliResult<String>
where
    S: LibraryService + ?Sized,
    W: Write,
{
    let request = copy_request(args);
    debug!(
        "library.cp {} -> {} (name: {:?})",
        request.source, request.destination, request.name
    );

    let new_id = copy_library_item(ctx, service, &request)?;
    terminal::print_result(out, &new_id).cli_context("writing item id")?;
    Ok(new_id)
}

/// Entry point used by `main`: connects to the server and runs the copy.
pub fn execute(client: &ClientArgs, args: &CopyArgs) -> CliResult<()> {
    let config = client_config(client)?;
    let ctx = OperationContext::with_timeout(Duration::from_secs(client.timeout));

    let service = RestLibraryService::connect(&config, &ctx)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_copy(&ctx, &service, args, &mut out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vlib_core::CoreError;

    fn client_args(url: Option<&str>) -> ClientArgs {
        ClientArgs {
            url: url.map(str::to_string),
            username: Some("admin".to_string()),
            password: Some("secret".to_string()),
            session: None,
            insecure: true,
            timeout: 30,
        }
    }

    #[test]
    fn config_from_flags() {
        let config = client_config(&client_args(Some("https://vc.example.com"))).unwrap();
        assert_eq!(config.url, "https://vc.example.com");
        assert_eq!(config.username.as_deref(), Some("admin"));
        assert!(config.insecure);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn config_requires_url() {
        let err = client_config(&client_args(None)).unwrap_err();
        assert!(matches!(err, CoreError::OperationFailed(ref m) if m.contains("VLIB_URL")));
    }

    #[test]
    fn request_keeps_name_override() {
        let args = CopyArgs {
            name: Some("item-Y".to_string()),
            source: "/content-A/item-X".to_string(),
            destination: "/content-B".to_string(),
        };
        let request = copy_request(&args);
        assert_eq!(request.name.as_deref(), Some("item-Y"));
        assert_eq!(request.destination, "/content-B");
    }
}
