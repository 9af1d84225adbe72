//! Login and sign-up pages.

use leveling_deferred::{RenderContext, SectionList, Shared};

use super::{deferred_header, PageForm};
use crate::forms::FormKind;
use crate::sections::{AccountForm, Header};

pub(super) fn mount(
    cx: &RenderContext<'_>,
    sections: &mut SectionList,
    header: &Shared<Header>,
    kind: FormKind,
) -> PageForm {
    sections.push_deferred(deferred_header(cx, header));

    let account = Shared::new(AccountForm::new(kind));
    sections.push_eager("account", account.clone());
    PageForm::Account(account)
}
