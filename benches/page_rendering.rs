//! Benchmarks for page rendering.
//!
//! These benchmarks measure drawing one full frame of each page into an
//! in-memory terminal.

use criterion::{criterion_group, criterion_main, Criterion};
use portfolio_tui::state::{ContactField, Page, Session};
use portfolio_tui::ui::render;
use ratatui::{backend::TestBackend, Terminal};

fn bench_render_pages(c: &mut Criterion) {
    for page in Page::ALL {
        let mut session = Session::default();
        session.navigate(page);
        let mut terminal = Terminal::new(TestBackend::new(140, 50)).unwrap();
        c.bench_function(&format!("render_{}", page.label().to_lowercase()), |b| {
            b.iter(|| {
                terminal
                    .draw(|frame| render(frame, &mut session))
                    .unwrap();
            })
        });
    }
}

fn bench_render_expanded_projects(c: &mut Criterion) {
    let mut session = Session::default();
    session.navigate(Page::Projects);
    for _ in 0..4 {
        session.client_sections_mut().toggle_selected();
        session.client_sections_mut().select_next();
    }
    let mut terminal = Terminal::new(TestBackend::new(140, 50)).unwrap();
    c.bench_function("render_projects_expanded", |b| {
        b.iter(|| {
            terminal
                .draw(|frame| render(frame, &mut session))
                .unwrap();
        })
    });
}

fn bench_filled_contact_form(c: &mut Criterion) {
    let mut session = Session::default();
    session.navigate(Page::Contact);
    let form = session.contact_form_mut();
    form.set_field(ContactField::Name, "Ada Lovelace");
    form.set_field(ContactField::Email, "ada@example.com");
    form.set_field(ContactField::Message, "Hello,\nI would like to talk about a pipeline.");
    let mut terminal = Terminal::new(TestBackend::new(140, 50)).unwrap();
    c.bench_function("render_contact_filled", |b| {
        b.iter(|| {
            terminal
                .draw(|frame| render(frame, &mut session))
                .unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_render_pages,
    bench_render_expanded_projects,
    bench_filled_contact_form
);
criterion_main!(benches);
