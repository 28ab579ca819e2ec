use anyhow::Context;
use clap::{App, Arg, ArgGroup, ArgMatches};
use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};
use proto::{Encode, Message, MessageType, Route};

pub fn app() -> App<'static, 'static> {
    App::new("msgenc")
        .version("0.1")
        .author("95th")
        .about("Encode a request/notify/response/push message and print it as hex")
        .arg(
            Arg::with_name("type")
                .long("type")
                .short("t")
                .help("Message type: request, notify, response, push or 0-3")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("id")
                .long("id")
                .help("Message id, written for request and response")
                .takes_value(true)
                .default_value("0"),
        )
        .arg(
            Arg::with_name("route")
                .long("route")
                .short("r")
                .help("Route name, or route code with --compress-route")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("compress-route")
                .long("compress-route")
                .help("Write the route as a 2 byte code"),
        )
        .arg(
            Arg::with_name("gzip")
                .long("gzip")
                .help("Mark the body as gzip compressed"),
        )
        .arg(
            Arg::with_name("body")
                .long("body")
                .short("b")
                .help("Message body as text")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("body-hex")
                .long("body-hex")
                .help("Message body as hex")
                .takes_value(true),
        )
        .group(ArgGroup::with_name("payload").args(&["body", "body-hex"]))
}

/// Message parts collected from the command line.
#[derive(Debug, PartialEq)]
pub struct Input {
    pub ty: MessageType,
    pub id: u64,
    pub route: Option<String>,
    pub compress_route: bool,
    pub gzip: bool,
    pub body: Option<Vec<u8>>,
}

impl Input {
    pub fn from_matches(m: &ArgMatches<'_>) -> anyhow::Result<Self> {
        let ty = m.value_of("type").unwrap_or_default();
        let ty = ty
            .parse::<MessageType>()
            .with_context(|| format!("Invalid message type: {}", ty))?;

        let id = m.value_of("id").unwrap_or("0");
        let id = id
            .parse::<u64>()
            .with_context(|| format!("Invalid message id: {}", id))?;

        let body = match (m.value_of("body"), m.value_of("body-hex")) {
            (Some(text), _) => Some(text.as_bytes().to_vec()),
            (None, Some(hex)) => Some(
                HEXLOWER_PERMISSIVE
                    .decode(hex.as_bytes())
                    .context("Invalid hex body")?,
            ),
            (None, None) => None,
        };

        Ok(Self {
            ty,
            id,
            route: m.value_of("route").map(String::from),
            compress_route: m.is_present("compress-route"),
            gzip: m.is_present("gzip"),
            body,
        })
    }

    fn route(&self) -> anyhow::Result<Route<'_>> {
        Ok(match &self.route {
            None => Route::None,
            Some(code) if self.compress_route => Route::Code(
                code.parse::<u32>()
                    .with_context(|| format!("Route code must be a number: {}", code))?,
            ),
            Some(name) => Route::Name(name),
        })
    }

    pub fn encode(&self) -> anyhow::Result<Vec<u8>> {
        let mut msg = Message::new(self.ty)
            .with_id(self.id)
            .with_route(self.route()?)
            .compress_route(self.compress_route)
            .compress_gzip(self.gzip);
        if let Some(body) = &self.body {
            msg = msg.with_body(body);
        }
        Ok(msg.encode_to_vec()?)
    }

    pub fn encode_hex(&self) -> anyhow::Result<String> {
        self.encode().map(|buf| HEXLOWER.encode(&buf))
    }
}
