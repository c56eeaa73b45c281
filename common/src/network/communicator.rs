use crate::messages::shared_messages::{NetworkMessage, Shutdown};
use crate::network::tcp_receiver::TCPReceiver;
use crate::network::tcp_sender::TCPSender;
use actix::prelude::*;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::split;
use tokio::net::TcpStream;

/// Pair of transport actors bound to one TCP stream. Incoming messages are
/// delivered to the owning actor `A`; outgoing ones go through `send`.
#[derive(Debug)]
pub struct Communicator<A>
where
    A: Actor<Context = Context<A>> + Handler<NetworkMessage>,
{
    pub sender: Option<Arc<Addr<TCPSender>>>,
    pub receiver: Option<Arc<Addr<TCPReceiver<A>>>>,
    pub local_address: SocketAddr,
    pub peer_address: SocketAddr,
}

impl<A> Communicator<A>
where
    A: Actor<Context = Context<A>> + Handler<NetworkMessage>,
{
    pub fn new(tcp_stream: TcpStream, destination_address: Addr<A>) -> io::Result<Self> {
        let local_address = tcp_stream.local_addr()?;
        let peer_address = tcp_stream.peer_addr()?;
        let (read_half, write_half) = split(tcp_stream);
        Ok(Self {
            sender: Some(Arc::new(TCPSender::new(write_half).start())),
            receiver: Some(Arc::new(
                TCPReceiver::new(read_half, peer_address, destination_address).start(),
            )),
            local_address,
            peer_address,
        })
    }

    /// Queues a message for the peer. Returns `false` once the sender is gone.
    pub fn send(&self, message: NetworkMessage) -> bool {
        match &self.sender {
            Some(sender) if sender.connected() => {
                sender.do_send(message);
                true
            }
            _ => false,
        }
    }

    pub fn shutdown(&mut self) {
        if let Some(sender) = self.sender.take() {
            sender.do_send(Shutdown);
        }
        self.receiver = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::catalog_messages::{FetchCollection, Resource};
    use std::time::Duration;
    use tokio::io::AsyncWriteExt;
    use tokio::net::TcpListener;

    #[derive(Default)]
    struct Recorder {
        received: Vec<NetworkMessage>,
    }

    impl Actor for Recorder {
        type Context = Context<Self>;
    }

    impl Handler<NetworkMessage> for Recorder {
        type Result = ();

        fn handle(&mut self, msg: NetworkMessage, _ctx: &mut Self::Context) {
            self.received.push(msg);
        }
    }

    struct Received;

    impl Message for Received {
        type Result = Vec<NetworkMessage>;
    }

    impl Handler<Received> for Recorder {
        type Result = MessageResult<Received>;

        fn handle(&mut self, _msg: Received, _ctx: &mut Self::Context) -> Self::Result {
            MessageResult(self.received.clone())
        }
    }

    async fn wait_for(recorder: &Addr<Recorder>, count: usize) -> Vec<NetworkMessage> {
        loop {
            let received = recorder.send(Received).await.unwrap();
            if received.len() >= count {
                return received;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    async fn socket_pair() -> (TcpStream, TcpStream) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (client, accepted) = tokio::join!(TcpStream::connect(addr), listener.accept());
        (client.unwrap(), accepted.unwrap().0)
    }

    #[test]
    #[ntest::timeout(5000)]
    fn test_messages_cross_the_socket_in_order() {
        System::new().block_on(async {
            let (client_stream, server_stream) = socket_pair().await;
            let server_side = Recorder::default().start();
            let client_side = Recorder::default().start();
            let _server_comm = Communicator::new(server_stream, server_side.clone()).unwrap();
            let client_comm = Communicator::new(client_stream, client_side).unwrap();

            for request_id in 1..=3 {
                assert!(client_comm.send(NetworkMessage::FetchCollection(FetchCollection {
                    request_id,
                    resource: Resource::Restaurants,
                    auth_token: None,
                })));
            }

            let received = wait_for(&server_side, 3).await;
            let ids: Vec<u64> = received
                .iter()
                .filter_map(|m| match m {
                    NetworkMessage::FetchCollection(f) => Some(f.request_id),
                    _ => None,
                })
                .collect();
            assert_eq!(ids, vec![1, 2, 3]);
        });
    }

    #[test]
    #[ntest::timeout(5000)]
    fn test_receiver_skips_garbage_and_reports_close() {
        System::new().block_on(async {
            let (mut raw_client, server_stream) = socket_pair().await;
            let server_side = Recorder::default().start();
            let _server_comm = Communicator::new(server_stream, server_side.clone()).unwrap();

            raw_client.write_all(b"not json\n\n").await.unwrap();
            raw_client
                .write_all(
                    b"{\"type\":\"RequestFailed\",\"request_id\":4,\"reason\":\"boom\"}\n",
                )
                .await
                .unwrap();
            raw_client.flush().await.unwrap();
            drop(raw_client);

            let received = wait_for(&server_side, 2).await;
            assert!(matches!(
                &received[0],
                NetworkMessage::RequestFailed(f) if f.request_id == 4
            ));
            assert!(matches!(received[1], NetworkMessage::ConnectionClosed(_)));
        });
    }
}
