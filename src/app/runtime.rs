impl<'doc, ST, FS, CH, IN> Presentation<'doc, ST, FS, CH, IN>
where
    ST: Stage,
    FS: FragmentStore,
    CH: PageChannel,
    IN: InputProvider,
{
    /// Drain pending input events, then inbound sync messages.
    ///
    /// The host event loop calls this after input or channel activity.
    /// Each event runs to completion (state, render, fragment write,
    /// publish) before the next one is looked at, so observers never
    /// see a page/render/fragment mismatch.
    pub fn pump(&mut self) -> PumpResult {
        let mut updated = false;

        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => updated |= self.handle_input(event),
                Ok(None) => break,
                Err(_) => {
                    warn!("deck-input: provider failed, stopping drain");
                    break;
                }
            }
        }

        loop {
            match self.channel.poll_message() {
                Ok(Some(message)) => updated |= self.apply_remote(message),
                Ok(None) => break,
                Err(_) => {
                    warn!("deck-sync: channel poll failed, stopping drain");
                    break;
                }
            }
        }

        if updated {
            PumpResult::Updated
        } else {
            PumpResult::Idle
        }
    }

    fn handle_input(&mut self, event: InputEvent) -> bool {
        let before = self.page;
        match event {
            InputEvent::NextPage => self.forward(),
            InputEvent::PrevPage => self.back(),
        }
        self.page != before
    }
}
