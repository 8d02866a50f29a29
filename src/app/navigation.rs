impl<'doc, ST, FS, CH, IN> Presentation<'doc, ST, FS, CH, IN>
where
    ST: Stage,
    FS: FragmentStore,
    CH: PageChannel,
    IN: InputProvider,
{
    /// Advance one page; saturates at the footer.
    pub fn forward(&mut self) {
        if self.page >= self.pages.page_count() {
            debug!("deck-nav: forward ignored at last page {}", self.page);
            return;
        }
        self.transition_locally(self.page + 1);
    }

    /// Step back one page; saturates at the header.
    pub fn back(&mut self) {
        if self.page <= 1 {
            debug!("deck-nav: back ignored at first page");
            return;
        }
        self.transition_locally(self.page - 1);
    }

    /// Jump straight to `page`.
    ///
    /// Out-of-range targets (and the current page itself) are rejected
    /// and the deck stays where it is.
    pub fn jump(&mut self, page: u16) {
        self.transition_locally(page);
    }

    fn transition_locally(&mut self, target: u16) {
        if !self.apply_page(target) {
            return;
        }
        if self.channel.publish(SyncMessage { page: self.page }).is_err() {
            warn!("deck-sync: publish failed at page {}", self.page);
        }
    }

    fn apply_remote(&mut self, message: SyncMessage) -> bool {
        if message.page == self.page {
            // Matched views are a fixed point; nothing to apply.
            return false;
        }
        debug!("deck-sync: peer moved to page {}", message.page);
        self.apply_page(message.page)
    }

    /// The single bounds-checked mutation behind both entry points.
    /// On success the render pass and the fragment write have already
    /// happened by the time this returns.
    fn apply_page(&mut self, target: u16) -> bool {
        if target == self.page {
            return false;
        }
        if !self.pages.contains_page(target) {
            debug!(
                "deck-nav: rejected page {} of {}",
                target,
                self.pages.page_count()
            );
            return false;
        }

        debug!(
            "deck-nav: page {} -> {}/{}",
            self.page,
            target,
            self.pages.page_count()
        );
        self.page = target;
        self.render();
        self.write_fragment();
        true
    }
}
