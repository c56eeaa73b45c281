use crate::logger::Logger;
use crate::messages::shared_messages::NetworkMessage;
use crate::messages::shared_messages::Shutdown;
use actix::prelude::*;
use colored::Color;
use std::collections::VecDeque;
use tokio::io::{AsyncWriteExt, BufWriter, WriteHalf};
use tokio::net::TcpStream;

/// The `TCPSender` actor serializes [`NetworkMessage`]s as JSON lines and writes
/// them to a TCP stream. Messages are queued so they leave in the order received.
pub struct TCPSender {
    /// The buffered writer for the TCP stream.
    pub writer: Option<BufWriter<WriteHalf<TcpStream>>>,
    /// The queue of messages to be sent.
    pub queue: VecDeque<NetworkMessage>,
    /// Set once the socket failed or was shut down. The writer alone cannot
    /// tell, since it is taken while a write is in flight.
    pub closed: bool,
    pub logger: Logger,
}

impl TCPSender {
    pub fn new(write_half: WriteHalf<TcpStream>) -> Self {
        Self {
            writer: Some(BufWriter::new(write_half)),
            queue: VecDeque::new(),
            closed: false,
            logger: Logger::new("TCP Sender", Color::White),
        }
    }
}

impl Actor for TCPSender {
    type Context = Context<Self>;
}

struct ProcessQueue;

impl Message for ProcessQueue {
    type Result = ();
}

impl Handler<NetworkMessage> for TCPSender {
    type Result = ();

    fn handle(&mut self, msg: NetworkMessage, ctx: &mut Self::Context) {
        if self.closed {
            self.logger.warn("Dropping message, socket already closed");
            return;
        }
        self.queue.push_back(msg);
        if self.queue.len() == 1 {
            ctx.notify(ProcessQueue);
        }
    }
}

impl Handler<ProcessQueue> for TCPSender {
    type Result = ResponseActFuture<Self, ()>;

    fn handle(&mut self, _msg: ProcessQueue, _ctx: &mut Self::Context) -> Self::Result {
        if let (Some(mut writer), Some(msg)) = (self.writer.take(), self.queue.front().cloned()) {
            let fut = async move {
                let serialized = match serde_json::to_string(&msg) {
                    Ok(s) => s,
                    Err(e) => return Err((Some(writer), format!("Error serializing message: {e}"))),
                };
                let to_send = format!("{}\n", serialized);

                if let Err(e) = writer.write_all(to_send.as_bytes()).await {
                    return Err((None, format!("Error writing to socket: {e}")));
                }
                if let Err(e) = writer.flush().await {
                    return Err((None, format!("Error flushing socket: {e}")));
                }

                Ok(writer)
            };

            Box::pin(fut.into_actor(self).map(move |res, act, ctx| {
                match res {
                    Ok(writer) => {
                        act.writer = Some(writer);
                        act.queue.pop_front();
                    }
                    // A message that cannot be serialized is dropped; the socket stays usable.
                    Err((Some(writer), err_msg)) => {
                        act.writer = Some(writer);
                        act.queue.pop_front();
                        act.logger.error(err_msg);
                    }
                    Err((None, err_msg)) => {
                        act.closed = true;
                        act.queue.clear();
                        act.logger.error(err_msg);
                    }
                }
                if act.writer.is_some() && !act.queue.is_empty() {
                    ctx.notify(ProcessQueue);
                }
            }))
        } else {
            Box::pin(async {}.into_actor(self))
        }
    }
}

impl Handler<Shutdown> for TCPSender {
    type Result = ();

    fn handle(&mut self, _msg: Shutdown, ctx: &mut Self::Context) {
        self.closed = true;
        self.writer = None;
        self.queue.clear();
        ctx.stop();
    }
}
