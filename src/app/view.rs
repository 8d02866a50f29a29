impl<'doc, ST, FS, CH, IN> Presentation<'doc, ST, FS, CH, IN>
where
    ST: Stage,
    FS: FragmentStore,
    CH: PageChannel,
    IN: InputProvider,
{
    /// Build a deck over `nodes`.
    ///
    /// Segmentation runs here, exactly once; a malformed document is a
    /// construction error. The initial page comes from the fragment
    /// store when it holds a valid page, otherwise page 1. Nothing is
    /// rendered until [`start`](Self::start).
    pub fn new(
        nodes: &'doc [SlideNode<'doc>],
        stage: ST,
        mut fragment: FS,
        channel: CH,
        input: IN,
        mut config: DeckConfig,
    ) -> Result<Self, SegmentError> {
        if config.note_marker.is_empty() {
            config.note_marker = DEFAULT_NOTE_MARKER;
        }

        let pages = segment(nodes)?;
        let total = pages.page_count();

        let page = match fragment.load() {
            Ok(Some(raw)) => match parse_page(&raw) {
                Some(requested) if requested <= total => requested,
                _ => 1,
            },
            Ok(None) => 1,
            Err(_) => {
                warn!("deck-location: fragment load failed, starting at page 1");
                1
            }
        };
        debug!("deck-nav: starting at page {}/{}", page, total);

        Ok(Self {
            nodes,
            pages,
            page,
            stage,
            fragment,
            channel,
            input,
            config,
        })
    }

    /// First render and canonical fragment write.
    ///
    /// Does not publish; only page transitions announce themselves to
    /// sibling views.
    pub fn start(&mut self) {
        self.render();
        self.write_fragment();
    }

    /// Current 1-based page.
    pub fn current_page(&self) -> u16 {
        self.page
    }

    /// Total page count, header and footer included.
    pub fn page_count(&self) -> u16 {
        self.pages.page_count()
    }

    fn render(&mut self) {
        self.stage.clear_notes();

        let mut failed = 0u16;
        for (index, group) in self.pages.iter().enumerate() {
            let visible = index as u16 + 1 == self.page;
            for node_index in group.nodes() {
                let display = if visible {
                    match self.nodes[node_index].layout {
                        LayoutHint::Block => NodeDisplay::Block,
                        LayoutHint::Columns => NodeDisplay::Columns,
                    }
                } else {
                    NodeDisplay::Hidden
                };
                if self
                    .stage
                    .set_node_display(node_index as u16, display)
                    .is_err()
                {
                    failed = failed.saturating_add(1);
                }
            }
        }
        if failed > 0 {
            warn!("deck-render: {} node display updates failed", failed);
        }

        let mut label_buf = [0u8; PROGRESS_LABEL_BYTES];
        let label = progress_label(self.page, self.pages.page_count(), &mut label_buf);
        if self.stage.set_progress(label).is_err() {
            warn!("deck-render: progress update failed");
        }

        if let Some(group) = self.pages.group(self.page) {
            for node_index in group.nodes() {
                let text = self.nodes[node_index].text;
                for note in marked_notes(text, self.config.note_marker) {
                    debug!("deck-note: {}", note);
                    self.stage.push_note(note);
                }
            }
        }
    }

    fn write_fragment(&mut self) {
        let text = format_page(self.page);
        if self.fragment.save(&text).is_err() {
            warn!("deck-location: fragment save failed at page {}", self.page);
        }
    }
}
