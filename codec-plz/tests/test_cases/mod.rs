mod base64;
mod errors;
mod single;
mod streaming;
