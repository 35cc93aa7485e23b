mod tests {
    use myrtio_hud_strip::channel::TryReceiveError;
    use myrtio_hud_strip::message::MESSAGE_CAPACITY;
    use myrtio_hud_strip::{GameEvent, MessageChannel, SendTextError};

    #[test]
    fn test_parse_flash() {
        assert_eq!(GameEvent::parse("flash:4.48975"), GameEvent::Flash(4.489_75));
        assert_eq!(GameEvent::parse("flash:1"), GameEvent::Flash(1.0));
        assert_eq!(GameEvent::parse("flash:-2.5"), GameEvent::Flash(-2.5));
    }

    #[test]
    fn test_parse_health() {
        assert_eq!(GameEvent::parse("localPlayer:93"), GameEvent::HealthUpdate(93));
        assert_eq!(GameEvent::parse("localPlayer:0"), GameEvent::HealthUpdate(0));
        assert_eq!(GameEvent::parse("localPlayer:150"), GameEvent::HealthUpdate(150));
        assert_eq!(GameEvent::parse("localPlayer:-5"), GameEvent::HealthUpdate(-5));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(GameEvent::parse("localPlayer:42\n"), GameEvent::HealthUpdate(42));
        assert_eq!(GameEvent::parse("flash: 0.5 "), GameEvent::Flash(0.5));
    }

    #[test]
    fn test_parse_unrecognized() {
        assert_eq!(GameEvent::parse(""), GameEvent::Unrecognized);
        assert_eq!(GameEvent::parse("hello"), GameEvent::Unrecognized);
        assert_eq!(GameEvent::parse("flash:"), GameEvent::Unrecognized);
        assert_eq!(GameEvent::parse("flash:abc"), GameEvent::Unrecognized);
        assert_eq!(GameEvent::parse("Flash:1.0"), GameEvent::Unrecognized);
        assert_eq!(GameEvent::parse("localPlayer:9.5"), GameEvent::Unrecognized);
        assert_eq!(GameEvent::parse("localPlayer:93abc"), GameEvent::Unrecognized);
        assert_eq!(GameEvent::parse("remotePlayer:50"), GameEvent::Unrecognized);
    }

    #[test]
    fn test_send_text() {
        let channel = MessageChannel::<2>::new();
        let sender = channel.sender();
        let receiver = channel.receiver();

        assert_eq!(sender.send_text("localPlayer:10"), Ok(()));
        assert_eq!(sender.send_text("flash:1.0"), Ok(()));
        assert_eq!(sender.send_text("localPlayer:20"), Err(SendTextError::Full));
        assert_eq!(channel.len(), 2);

        assert_eq!(receiver.try_receive().as_deref(), Ok("localPlayer:10"));
        assert_eq!(receiver.try_receive().as_deref(), Ok("flash:1.0"));
        assert_eq!(receiver.try_receive(), Err(TryReceiveError));
        assert!(channel.is_empty());
    }

    #[test]
    fn test_send_text_too_long() {
        let channel = MessageChannel::<2>::new();
        let long = "x".repeat(MESSAGE_CAPACITY + 1);
        assert_eq!(channel.sender().send_text(&long), Err(SendTextError::TooLong));
        assert!(channel.is_empty());

        let exact = "x".repeat(MESSAGE_CAPACITY);
        assert_eq!(channel.sender().send_text(&exact), Ok(()));
    }

    #[test]
    fn test_clear_drops_queued_messages() {
        let channel = MessageChannel::<2>::new();
        let sender = channel.sender();
        sender.send_text("localPlayer:10").unwrap();
        sender.send_text("flash:1.0").unwrap();

        channel.clear();
        assert!(channel.is_empty());
        assert_eq!(channel.receiver().try_receive(), Err(TryReceiveError));
        assert_eq!(sender.send_text("localPlayer:20"), Ok(()));
    }

    #[test]
    fn test_send_text_error_display() {
        assert_eq!(SendTextError::Full.to_string(), "message channel is full");
        assert_eq!(
            SendTextError::TooLong.to_string(),
            format!("message longer than {MESSAGE_CAPACITY} bytes")
        );
    }
}
