use std::net::IpAddr;

use chrono::prelude::*;
use hyper::{Request, StatusCode};

const DATE_FORMAT: &str = "%d/%b/%Y %H:%M:%S";

pub fn request_received(peer: IpAddr, request_line: &str, status: StatusCode) {
    println!("{}", line(peer, Local::now(), request_line, status));
}

pub fn request_line<B>(req: &Request<B>) -> String {
    format!("{} {} {:?}", req.method(), req.uri(), req.version())
}

fn line(
    peer: IpAddr,
    timestamp: DateTime<Local>,
    request_line: &str,
    status: StatusCode,
) -> String {
    format!(
        "Backend received: {} - - [{}] \"{}\" {} -",
        peer,
        timestamp.format(DATE_FORMAT),
        request_line,
        status.as_u16()
    )
}
