use tracing::{debug, info};

use crate::models::comments::CommentList;
use crate::models::locale::Locale;
use crate::models::post::PostProps;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SubmitOutcome {
    Submitted,
    /// The draft was empty; the required-field message is now set.
    Rejected,
}

/// Local state of one post card: the caller's props plus the comments and
/// draft the card owns.
#[derive(Clone, Debug)]
pub struct PostView {
    props: PostProps,
    locale: Locale,
    comments: CommentList,
    draft: String,
    validity: Option<&'static str>,
}

impl PostView {
    pub fn new(props: PostProps, locale: Locale) -> Self {
        Self {
            props,
            locale,
            comments: CommentList::new(),
            draft: String::new(),
            validity: None,
        }
    }

    pub fn props(&self) -> &PostProps {
        &self.props
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn comments(&self) -> &CommentList {
        &self.comments
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Custom validity message of the comment textbox, if any.
    pub fn validity(&self) -> Option<&'static str> {
        self.validity
    }

    pub fn can_submit(&self) -> bool {
        !self.draft.is_empty()
    }

    pub fn submit_comment(&mut self) -> SubmitOutcome {
        if !self.can_submit() {
            // the required-field check fires instead of the submit handler
            self.report_empty_draft();
            return SubmitOutcome::Rejected;
        }

        let draft = std::mem::take(&mut self.draft);
        self.comments = self.comments.appended(draft);
        info!(count = self.comments.len(), "comment submitted");
        SubmitOutcome::Submitted
    }

    pub fn update_draft(&mut self, value: String) {
        self.validity = None;
        self.draft = value;
    }

    pub fn report_empty_draft(&mut self) {
        debug!("empty comment rejected");
        self.validity = Some(self.locale.strings().required_message);
    }

    pub fn delete_comment(&mut self, comment: &str) {
        let before = self.comments.len();
        self.comments = self.comments.without(comment);
        info!(removed = before - self.comments.len(), "comment deleted");
    }
}
