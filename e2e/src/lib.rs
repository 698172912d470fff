//! End-to-end scenarios for the Fictioneers SDK against a mocked API.

#[cfg(test)]
mod tests;
