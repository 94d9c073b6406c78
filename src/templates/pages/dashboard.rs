// templates/pages/dashboard.rs

use crate::catalog::models::Submission;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn dashboard_page(submissions: &[Submission]) -> Markup {
    desktop_layout(
        "Dashboard",
        html! {
            main class="container" {
                h1 { "Artist Submissions" }
                p class="muted" { "Review and manage all incoming profiles" }

                table {
                    thead {
                        tr {
                            th { "#" }
                            th { "Name" }
                            th { "Category" }
                            th { "Fee" }
                            th { "Submitted" }
                        }
                    }
                    tbody {
                        @if submissions.is_empty() {
                            tr {
                                td colspan="5" class="muted" { "No artist submissions found." }
                            }
                        } @else {
                            @for (index, item) in submissions.iter().enumerate() {
                                tr {
                                    td { (index + 1) }
                                    td { strong { (item.name) } }
                                    td { (item.category) }
                                    td { (item.fee) }
                                    td { (item.submitted_at) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
