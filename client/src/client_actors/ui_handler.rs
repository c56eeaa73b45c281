use crate::commands::{parse, Command};
use crate::messages::internal_messages::{InputClosed, InputLine, UIMessage, UserCommand};
use crate::views;
use actix::prelude::*;
use colored::*;
use common::logger::Logger;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::thread;
use tokio::sync::Notify;

/// Terminal side of the client: turns typed lines into commands for the app
/// and prints whatever the app wants shown.
pub struct UIHandler {
    pub app: Recipient<UserCommand>,
    /// Signalled once the user quits, stdin closes or a fatal error arrives.
    pub shutdown: Arc<Notify>,
    pub logger: Logger,
}

impl UIHandler {
    pub fn new(app: Recipient<UserCommand>, shutdown: Arc<Notify>) -> Self {
        Self {
            app,
            shutdown,
            logger: Logger::new("UI", Color::Yellow),
        }
    }

    fn prompt(&self) {
        print!("{} ", ">".bold());
        let _ = io::stdout().flush();
    }
}

/// Reads stdin on a dedicated thread, forwarding each line to `ui`.
pub fn listen_stdin(ui: Addr<UIHandler>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => ui.do_send(InputLine(line)),
                Err(_) => break,
            }
        }
        ui.do_send(InputClosed);
    });
}

impl Actor for UIHandler {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        self.logger.debug("UIHandler started");
    }
}

impl Handler<InputLine> for UIHandler {
    type Result = ();

    fn handle(&mut self, msg: InputLine, ctx: &mut Self::Context) -> Self::Result {
        if msg.0.trim().is_empty() {
            self.prompt();
            return;
        }
        match parse(&msg.0) {
            Ok(Command::Quit) => {
                println!("Bye!");
                self.shutdown.notify_one();
                ctx.stop();
            }
            Ok(command) => self.app.do_send(UserCommand(command)),
            Err(hint) => {
                println!("{}", hint.yellow());
                self.prompt();
            }
        }
    }
}

impl Handler<InputClosed> for UIHandler {
    type Result = ();

    fn handle(&mut self, _msg: InputClosed, ctx: &mut Self::Context) -> Self::Result {
        self.logger.info("Input closed");
        self.shutdown.notify_one();
        ctx.stop();
    }
}

impl Handler<UIMessage> for UIHandler {
    type Result = ();

    fn handle(&mut self, msg: UIMessage, ctx: &mut Self::Context) -> Self::Result {
        match msg {
            UIMessage::ShowScreen(screen) => {
                println!("\n{}\n{screen}\n{}", views::rule(), views::rule());
                self.prompt();
            }
            UIMessage::ShowHint(hint) => {
                println!("{}", hint.yellow());
                self.prompt();
            }
            UIMessage::Fatal(reason) => {
                self.logger.error(format!("Fatal: {reason}"));
                self.shutdown.notify_one();
                ctx.stop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Route;
    use std::time::Duration;

    #[derive(Default)]
    struct Recorder {
        commands: Vec<Command>,
    }

    impl Actor for Recorder {
        type Context = Context<Self>;
    }

    impl Handler<UserCommand> for Recorder {
        type Result = ();

        fn handle(&mut self, msg: UserCommand, _ctx: &mut Self::Context) {
            self.commands.push(msg.0);
        }
    }

    struct Recorded;

    impl Message for Recorded {
        type Result = Vec<Command>;
    }

    impl Handler<Recorded> for Recorder {
        type Result = MessageResult<Recorded>;

        fn handle(&mut self, _msg: Recorded, _ctx: &mut Self::Context) -> Self::Result {
            MessageResult(self.commands.clone())
        }
    }

    fn start() -> (Addr<UIHandler>, Addr<Recorder>, Arc<Notify>) {
        let recorder = Recorder::default().start();
        let shutdown = Arc::new(Notify::new());
        let ui = UIHandler::new(recorder.clone().recipient(), shutdown.clone()).start();
        (ui, recorder, shutdown)
    }

    #[actix_rt::test]
    async fn test_valid_lines_are_forwarded_and_invalid_ones_are_not() {
        let (ui, recorder, _shutdown) = start();

        ui.send(InputLine("dance".to_string())).await.unwrap();
        ui.send(InputLine("go delivery".to_string())).await.unwrap();

        let commands = recorder.send(Recorded).await.unwrap();
        assert_eq!(commands, vec![Command::Go(Route::Delivery)]);
    }

    #[actix_rt::test]
    async fn test_quit_signals_shutdown() {
        let (ui, recorder, shutdown) = start();

        ui.do_send(InputLine("quit".to_string()));

        tokio::time::timeout(Duration::from_secs(2), shutdown.notified())
            .await
            .unwrap();
        assert!(recorder.send(Recorded).await.unwrap().is_empty());
    }

    #[actix_rt::test]
    async fn test_fatal_message_signals_shutdown() {
        let (ui, _recorder, shutdown) = start();

        ui.do_send(UIMessage::Fatal("Unauthorized: bad token".to_string()));

        tokio::time::timeout(Duration::from_secs(2), shutdown.notified())
            .await
            .unwrap();
    }
}
