use crate::logger::Logger;
use crate::messages::shared_messages::{ConnectionClosed, NetworkMessage};
use actix::dev::ToEnvelope;
use actix::prelude::*;
use colored::Color;
use std::net::SocketAddr;
use tokio::io::{AsyncBufReadExt, BufReader, ReadHalf};
use tokio::net::TcpStream;

/// Reads JSON lines from a socket and forwards each decoded [`NetworkMessage`]
/// to `destination`. When the stream ends, `ConnectionClosed` is delivered.
pub struct TCPReceiver<A: Actor + Handler<NetworkMessage>> {
    remote_addr: SocketAddr,
    reader: Option<BufReader<ReadHalf<TcpStream>>>,
    destination: Addr<A>,
    logger: Logger,
}

impl<A> TCPReceiver<A>
where
    A: Actor + Handler<NetworkMessage>,
{
    pub fn new(reader: ReadHalf<TcpStream>, remote_addr: SocketAddr, destination: Addr<A>) -> Self {
        Self {
            remote_addr,
            reader: Some(BufReader::new(reader)),
            destination,
            logger: Logger::new(format!("TCP Receiver {remote_addr}"), Color::White),
        }
    }
}

impl<A> Actor for TCPReceiver<A>
where
    A: Actor + Handler<NetworkMessage> + 'static,
    A::Context: ToEnvelope<A, NetworkMessage>,
{
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        let Some(reader) = self.reader.take() else {
            self.logger.error("Receiver started without a reader");
            ctx.stop();
            return;
        };
        let addr = self.destination.clone();
        let remote_addr = self.remote_addr;
        let logger = self.logger.clone();

        ctx.spawn(
            async move {
                let mut lines = reader.lines();
                loop {
                    match lines.next_line().await {
                        Ok(Some(line)) if line.trim().is_empty() => continue,
                        Ok(Some(line)) => match serde_json::from_str::<NetworkMessage>(&line) {
                            Ok(msg) => addr.do_send(msg),
                            Err(e) => logger.warn(format!("Skipping undecodable line ({e}): {line}")),
                        },
                        Ok(None) => break,
                        Err(e) => {
                            logger.warn(format!("Read error: {e}"));
                            break;
                        }
                    }
                }
                logger.debug("Connection closed");
                addr.do_send(NetworkMessage::ConnectionClosed(ConnectionClosed {
                    remote_addr,
                }));
            }
            .into_actor(self)
            .map(|_, _act, ctx| ctx.stop()),
        );
    }
}
