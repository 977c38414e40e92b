use anyhow::Result;
use chrono::Datelike;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio::card::{Accent, Card, Presentable};
use folio::catalog::Skill;
use folio::filter::Facet;
use folio::pages::{AboutTab, CertificationsPage, Page, ProjectDetailsPage};
use folio::theme::{Palette, Rgb};
use folio::{App, Control, Input, NavItem, ShareOutcome};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Poll timeout; also how often share feedback gets a chance to expire
const TICK: Duration = Duration::from_millis(250);

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "ui loop failed");
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    let size = terminal.size()?;
    app.handle(
        Input::Resize {
            width: size.width,
            height: size.height,
        },
        Instant::now(),
    );

    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(TICK)? {
            let input = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && key.code == KeyCode::Char('c')
                    {
                        return Ok(());
                    }
                    match key.code {
                        KeyCode::Char(c) => Some(Input::Char(c)),
                        KeyCode::Backspace => Some(Input::Backspace),
                        KeyCode::Enter => Some(Input::Enter),
                        KeyCode::Esc => Some(Input::Esc),
                        KeyCode::Up => Some(Input::Up),
                        KeyCode::Down => Some(Input::Down),
                        KeyCode::Left => Some(Input::Left),
                        KeyCode::Right => Some(Input::Right),
                        KeyCode::Home => Some(Input::Home),
                        KeyCode::End => Some(Input::End),
                        KeyCode::BackTab => Some(Input::BackTab),
                        KeyCode::Tab => {
                            if key.modifiers.contains(KeyModifiers::SHIFT) {
                                Some(Input::BackTab)
                            } else {
                                Some(Input::Tab)
                            }
                        }
                        _ => None,
                    }
                }
                Event::Resize(width, height) => Some(Input::Resize { width, height }),
                _ => None,
            };

            if let Some(input) = input {
                if app.handle(input, Instant::now()) == Control::Quit {
                    return Ok(());
                }
            }
        }

        app.tick(Instant::now());
    }
}

fn ui(f: &mut Frame, app: &App) {
    let palette = app.palette();

    // Background in the active theme
    f.render_widget(
        Block::default().style(Style::default().bg(color(palette.background))),
        f.size(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navbar
            Constraint::Min(0),    // Page
            Constraint::Length(3), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    match app.page() {
        Page::Home(_) => render_home(f, chunks[1], app),
        Page::About(_) => render_about(f, chunks[1], app),
        Page::Projects(page) => {
            let cards = page
                .listing
                .results()
                .iter()
                .enumerate()
                .map(|(i, p)| p.card(i))
                .collect();
            let chips = chip_line(
                "Category",
                &page.category_options,
                page.listing.selection(Facet::Category),
                &palette,
                |_| None,
            );
            render_listing(f, chunks[1], app, " Projects ", vec![chips], cards, |_| None);
        }
        Page::ProjectDetails(page) => render_project_details(f, chunks[1], page, &palette),
        Page::Certifications(page) => render_certifications(f, chunks[1], app, page),
        Page::Documentations(page) => {
            let cards = page
                .listing
                .results()
                .iter()
                .enumerate()
                .map(|(i, d)| d.card(i))
                .collect();
            render_listing(f, chunks[1], app, " Documentations ", vec![], cards, |_| None);
        }
        Page::Blog(page) => {
            let cards = page
                .listing
                .results()
                .iter()
                .enumerate()
                .map(|(i, p)| p.card(i))
                .collect();
            let chips = chip_line(
                "Category",
                &page.category_options,
                page.listing.selection(Facet::Category),
                &palette,
                |_| None,
            );
            render_listing(f, chunks[1], app, " Blog ", vec![chips], cards, |_| None);
        }
        Page::Contact(_) => render_contact(f, chunks[1], app),
        Page::NotFound(page) => render_message(
            f,
            chunks[1],
            &palette,
            "404 - Page Not Found",
            &format!("Nothing lives at {}.", page.path),
            "Back to Home",
        ),
    }

    render_status_bar(f, chunks[2], app);
    render_footer(f, chunks[3], app);
}

// ============================================================================
// CHROME
// ============================================================================

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();

    let mut tab_spans = vec![Span::styled(
        format!(" {} ", app.catalog().profile.name),
        Style::default()
            .fg(color(palette.primary))
            .add_modifier(Modifier::BOLD),
    )];
    tab_spans.push(Span::raw("  "));

    for (i, item) in NavItem::ALL.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::styled(" │ ", Style::default().fg(color(palette.border))));
        }

        let style = if Some(*item) == app.nav_item() {
            Style::default()
                .fg(color(palette.accent))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(color(palette.muted))
        };

        tab_spans.push(Span::styled(item.title(), style));
    }

    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Theme: {}", app.theme().as_str()),
        Style::default().fg(color(palette.text)),
    ));

    let header = Paragraph::new(vec![Line::from(tab_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color(palette.primary))),
    );

    f.render_widget(header, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();
    let key = Style::default().fg(color(palette.primary));

    let mut status_spans = vec![Span::styled(
        format!(" {} ", app.location()),
        Style::default().fg(color(palette.accent)),
    )];

    if let Some(message) = app.status() {
        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled(
            message.to_string(),
            Style::default()
                .fg(color(if app.status_is_error() {
                    palette.error
                } else {
                    palette.success
                }))
                .add_modifier(Modifier::BOLD),
        ));
    }

    let mut hints: Vec<(&str, &str)> = vec![("Tab", "Page"), ("↑/↓", "Nav"), ("Enter", "Open")];
    if app.search_focused() {
        hints = vec![("Enter/Esc", "Done typing")];
    } else {
        if app.page().has_search() {
            hints.push(("/", "Search"));
        }
        match app.page() {
            Page::Certifications(_) => {
                hints.extend([("i", "Issuer"), ("c", "Category"), ("f", "Filters"), ("r", "Reset"), ("s", "Share")])
            }
            Page::Projects(_) | Page::Blog(_) => hints.extend([("c", "Category"), ("r", "Reset")]),
            Page::Home(_) | Page::About(_) => hints.push(("←/→", "Slide")),
            _ => {}
        }
        hints.push(("t", "Theme"));
    }

    for (k, label) in hints {
        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled(k, key));
        status_spans.push(Span::raw(format!(" {}", label)));
    }
    status_spans.push(Span::raw(" | "));
    status_spans.push(Span::styled("q", Style::default().fg(color(palette.error))));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(status_spans)])
        .style(Style::default().fg(color(palette.text)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color(palette.border))),
        );

    f.render_widget(status_bar, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();
    let year = chrono::Local::now().year();
    let footer = Paragraph::new(format!(
        " © {} {}. All rights reserved.",
        year,
        app.catalog().profile.name
    ))
    .style(Style::default().fg(color(palette.muted)));
    f.render_widget(footer, area);
}

// ============================================================================
// LISTINGS
// ============================================================================

/// Search line, chip lines, then the cards as a table
fn render_listing<F>(
    f: &mut Frame,
    area: Rect,
    app: &App,
    title: &str,
    extra_lines: Vec<Line>,
    cards: Vec<Card>,
    badge: F,
) where
    F: Fn(usize) -> Option<Span<'static>>,
{
    let palette = app.palette();
    let mut lines = vec![search_line(app, &palette)];
    lines.extend(extra_lines);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(lines.len() as u16 + 2), Constraint::Min(0)])
        .split(area);

    let controls = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color(palette.border))),
    );
    f.render_widget(controls, chunks[0]);

    render_cards(f, chunks[1], app, title, &cards, badge);
}

fn render_cards<F>(f: &mut Frame, area: Rect, app: &App, title: &str, cards: &[Card], badge: F)
where
    F: Fn(usize) -> Option<Span<'static>>,
{
    let palette = app.palette();

    if cards.is_empty() {
        render_message(
            f,
            area,
            &palette,
            "No results found",
            "Try a different search term or filter.",
            "r to reset",
        );
        return;
    }

    let header_cells = ["Title", "Info", "Tags", "Links"].iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(color(palette.primary))
                .add_modifier(Modifier::BOLD),
        )
    });
    let header = Row::new(header_cells).height(1);

    let rows = cards.iter().enumerate().map(|(i, card)| {
        let mut title_spans = vec![Span::styled(
            truncate(&card.title, 38),
            Style::default().fg(accent_color(card.accent)),
        )];
        if let Some(span) = badge(i) {
            title_spans.push(Span::raw(" "));
            title_spans.push(span);
        }

        let links: Vec<&str> = card.links.iter().map(|l| l.label.as_str()).collect();
        Row::new(vec![
            Cell::from(Line::from(title_spans)),
            Cell::from(truncate(card.subtitle.as_deref().unwrap_or(&card.body), 40)),
            Cell::from(truncate(&card.badges.join(", "), 30)),
            Cell::from(links.join(" · ")),
        ])
        .style(Style::default().fg(color(palette.text)))
        .height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(32),
            Constraint::Percentage(30),
            Constraint::Percentage(22),
            Constraint::Percentage(16),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color(palette.border)))
            .title(title.to_string()),
    )
    .highlight_style(
        Style::default()
            .bg(color(palette.border))
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    let mut state = TableState::default();
    state.select(app.page().active());
    f.render_stateful_widget(table, area, &mut state);
}

fn search_line(app: &App, palette: &Palette) -> Line<'static> {
    let query = app.page().query().unwrap_or("").to_string();
    let (text, style) = if app.search_focused() {
        (
            format!("{}▏", query),
            Style::default()
                .fg(color(palette.text))
                .add_modifier(Modifier::UNDERLINED),
        )
    } else if query.is_empty() {
        ("press / to search".to_string(), Style::default().fg(color(palette.muted)))
    } else {
        (query, Style::default().fg(color(palette.text)))
    };

    Line::from(vec![
        Span::styled("🔍 ", Style::default().fg(color(palette.primary))),
        Span::styled(text, style),
    ])
}

fn chip_line<F>(
    label: &str,
    options: &[String],
    selected: &str,
    palette: &Palette,
    count: F,
) -> Line<'static>
where
    F: Fn(&str) -> Option<usize>,
{
    let mut spans = vec![Span::styled(
        format!("{}: ", label),
        Style::default().fg(color(palette.muted)),
    )];
    for option in options {
        let text = match count(option) {
            Some(n) => format!("[{} ({})]", option, n),
            None => format!("[{}]", option),
        };
        let style = if option.eq_ignore_ascii_case(selected) {
            Style::default()
                .fg(color(palette.background))
                .bg(color(palette.primary))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color(palette.text))
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

// ============================================================================
// PAGES
// ============================================================================

fn render_home(f: &mut Frame, area: Rect, app: &App) {
    let Page::Home(home) = app.page() else {
        return;
    };
    let palette = app.palette();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(5),
            Constraint::Length(8),
        ])
        .split(area);

    // Hero
    let buttons: Vec<Span> = folio::pages::HomePage::hero_links()
        .iter()
        .flat_map(|(label, _)| {
            [
                Span::styled(
                    format!("[ {} ]", label),
                    Style::default().fg(color(palette.primary)),
                ),
                Span::raw("  "),
            ]
        })
        .collect();
    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Hi, I'm {}", home.name),
            Style::default()
                .fg(color(palette.text))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            home.headline.clone(),
            Style::default().fg(color(palette.accent)),
        )),
        Line::from(""),
        Line::from(buttons),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color(palette.border))),
    );
    f.render_widget(hero, chunks[0]);

    // Featured projects
    let cards: Vec<Card> = home
        .featured
        .iter()
        .enumerate()
        .map(|(i, p)| p.card(i))
        .collect();
    render_cards(f, chunks[1], app, " Featured Projects ", &cards, |_| None);

    // Testimonials
    let testimonials = home.visible_testimonials();
    let constraints: Vec<Constraint> = testimonials
        .iter()
        .map(|_| Constraint::Ratio(1, testimonials.len().max(1) as u32))
        .collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color(palette.border)))
        .title(format!(
            " Testimonials {} ",
            dots(home.carousel.current(), home.carousel.indicator_count())
        ));
    let inner = block.inner(chunks[2]);
    f.render_widget(block, chunks[2]);

    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);
    for (slot, (i, testimonial)) in slots.iter().zip(testimonials.iter().enumerate()) {
        let card = testimonial.card(home.carousel.current() + i);
        let text = vec![
            Line::from(Span::styled(
                card.body.clone(),
                Style::default().fg(color(palette.text)),
            )),
            Line::from(Span::styled(
                format!("- {}, {}", card.title, card.subtitle.unwrap_or_default()),
                Style::default().fg(accent_color(card.accent)),
            )),
        ];
        f.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), *slot);
    }
}

fn render_about(f: &mut Frame, area: Rect, app: &App) {
    let Page::About(about) = app.page() else {
        return;
    };
    let palette = app.palette();
    let profile = &about.profile;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let mut tab_spans = vec![];
    for (i, tab) in AboutTab::ALL.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }
        let style = if *tab == about.tab {
            Style::default()
                .fg(color(palette.accent))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(color(palette.muted))
        };
        tab_spans.push(Span::styled(tab.title(), style));
    }
    tab_spans.push(Span::raw("   "));
    tab_spans.push(Span::styled(
        "[ Enter: Download Resume ]",
        Style::default().fg(color(palette.primary)),
    ));
    f.render_widget(
        Paragraph::new(Line::from(tab_spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color(palette.border))),
        ),
        chunks[0],
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color(palette.border)))
        .title(format!(" {} ", about.tab.title()));

    let text_style = Style::default().fg(color(palette.text));
    let heading = Style::default()
        .fg(color(palette.primary))
        .add_modifier(Modifier::BOLD);

    match about.tab {
        AboutTab::About => {
            let mut lines: Vec<Line> = profile
                .about
                .iter()
                .flat_map(|p| [Line::from(Span::styled(p.clone(), text_style)), Line::from("")])
                .collect();
            lines.push(Line::from(vec![
                Span::styled("Experience: ", heading),
                Span::styled(format!("{} years", profile.years_of_experience), text_style),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Location: ", heading),
                Span::styled(profile.location.clone(), text_style),
            ]));
            f.render_widget(
                Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
                chunks[1],
            );
        }
        AboutTab::Education | AboutTab::Experience => {
            let items = if about.tab == AboutTab::Education {
                &profile.education
            } else {
                &profile.experience
            };
            let mut lines = Vec::new();
            for item in items {
                lines.push(Line::from(vec![
                    Span::styled(format!("{:<16}", item.period), Style::default().fg(color(palette.accent))),
                    Span::styled(item.title.clone(), heading),
                ]));
                lines.push(Line::from(Span::styled(
                    format!("{:<16}{}", "", item.organization),
                    Style::default().fg(color(palette.muted)),
                )));
                for detail in &item.details {
                    for part in wrap_text(detail, 70).lines() {
                        lines.push(Line::from(Span::styled(
                            format!("{:<16}{}", "", part.trim_start()),
                            text_style,
                        )));
                    }
                }
                lines.push(Line::from(""));
            }
            f.render_widget(Paragraph::new(lines).block(block), chunks[1]);
        }
        AboutTab::Skills => render_skills(f, chunks[1], block, &profile.skills, &palette),
    }
}

fn render_skills(f: &mut Frame, area: Rect, block: Block, skills: &[Skill], palette: &Palette) {
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            skills
                .iter()
                .map(|_| Constraint::Length(1))
                .chain(std::iter::once(Constraint::Min(0)))
                .collect::<Vec<_>>(),
        )
        .split(inner);

    for (skill, row) in skills.iter().zip(rows.iter()) {
        let gauge = Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(color(palette.primary))
                    .bg(color(palette.border)),
            )
            .ratio(skill.ratio())
            .label(format!("{} {}%", skill.name, skill.percentage()));
        f.render_widget(gauge, *row);
    }
}

fn render_project_details(f: &mut Frame, area: Rect, page: &ProjectDetailsPage, palette: &Palette) {
    let (project, related, cursor) = match page {
        ProjectDetailsPage::Found {
            project,
            related,
            ..
        } => (project, related, page.active()),
        ProjectDetailsPage::NotFound { .. } => {
            render_message(
                f,
                area,
                palette,
                "Project Not Found",
                "The project you're looking for doesn't exist or has been removed.",
                "Back to Projects",
            );
            return;
        }
    };

    let text_style = Style::default().fg(color(palette.text));
    let heading = Style::default()
        .fg(color(palette.primary))
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(
            project.title.clone(),
            Style::default()
                .fg(color(palette.accent))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} · {}", project.category_label(), project.tags.join(", ")),
            Style::default().fg(color(palette.muted)),
        )),
        Line::from(""),
    ];

    match &project.details {
        Some(details) => {
            lines.push(Line::from(Span::styled(
                format!("Completed {}", details.date),
                Style::default().fg(color(palette.muted)),
            )));
            for paragraph in &details.long_description {
                lines.push(Line::from(Span::styled(paragraph.clone(), text_style)));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Technologies", heading)));
            lines.push(Line::from(Span::styled(details.technologies.join(" · "), text_style)));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Challenges", heading)));
            lines.push(Line::from(Span::styled(details.challenges.clone(), text_style)));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Solution", heading)));
            lines.push(Line::from(Span::styled(details.solution.clone(), text_style)));
        }
        None => lines.push(Line::from(Span::styled(project.description.clone(), text_style))),
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Other Projects", heading)));
    for (i, other) in related.iter().enumerate() {
        let marker = if cursor == Some(i) { "→ " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{}{}", marker, other.title),
            Style::default().fg(accent_color(Accent::for_index(i))),
        )));
    }

    let links: Vec<&str> = [
        project.live_url.as_ref().map(|_| "Enter Live Demo"),
        project.github_url.as_ref().map(|_| "o Code"),
        Some("Esc Back to Projects"),
    ]
    .into_iter()
    .flatten()
    .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        links.join("  |  "),
        Style::default().fg(color(palette.primary)),
    )));

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color(palette.border)))
                    .title(" Project Details "),
            ),
        area,
    );
}

fn render_certifications(f: &mut Frame, area: Rect, app: &App, page: &CertificationsPage) {
    let palette = app.palette();

    let mut extra = vec![Line::from(Span::styled(
        page.summary(),
        Style::default().fg(color(palette.muted)),
    ))];
    if page.filters_open {
        extra.push(chip_line(
            "Issuer",
            &page.issuer_options,
            page.issuer(),
            &palette,
            |v| page.count(Facet::Issuer, v),
        ));
        extra.push(chip_line(
            "Category",
            &page.category_options,
            page.category(),
            &palette,
            |v| page.count(Facet::Category, v),
        ));
    } else {
        extra.push(Line::from(Span::styled(
            format!(
                "Issuer: {}  Category: {}  (f to show filters)",
                page.issuer(),
                page.category()
            ),
            Style::default().fg(color(palette.text)),
        )));
    }

    let results = page.listing.results();
    let ids: Vec<u32> = results.iter().map(|c| c.id).collect();
    let cards = results
        .iter()
        .enumerate()
        .map(|(i, c)| c.card(i))
        .collect();

    let success = color(palette.success);
    let error = color(palette.error);
    let feedback = page.feedback.clone();
    render_listing(f, area, app, " Certifications ", extra, cards, move |i| {
        let outcome = ids.get(i).and_then(|id| feedback.status_for(*id))?;
        let style = match outcome {
            ShareOutcome::Copied => Style::default().fg(success),
            ShareOutcome::Failed => Style::default().fg(error),
        };
        Some(Span::styled(outcome.message(), style))
    });
}

fn render_contact(f: &mut Frame, area: Rect, app: &App) {
    let Page::Contact(contact) = app.page() else {
        return;
    };
    let palette = app.palette();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let rows = contact.entries.iter().map(|entry| {
        Row::new(vec![
            Cell::from(entry.label.clone()).style(Style::default().fg(color(palette.primary))),
            Cell::from(entry.value.clone()).style(Style::default().fg(color(palette.text))),
        ])
    });
    let table = Table::new(rows, [Constraint::Length(12), Constraint::Min(10)])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color(palette.border)))
                .title(" Get In Touch "),
        )
        .highlight_style(
            Style::default()
                .bg(color(palette.border))
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("→ ");
    let mut state = TableState::default();
    state.select(contact.active());
    f.render_stateful_widget(table, chunks[0], &mut state);

    let services: Vec<Line> = contact
        .services
        .iter()
        .map(|s| Line::from(Span::styled(format!("• {}", s), Style::default().fg(color(palette.text)))))
        .collect();
    f.render_widget(
        Paragraph::new(services).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color(palette.border)))
                .title(" Services "),
        ),
        chunks[1],
    );
}

fn render_message(f: &mut Frame, area: Rect, palette: &Palette, title: &str, body: &str, action: &str) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(color(palette.accent))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(body.to_string(), Style::default().fg(color(palette.text)))),
        Line::from(""),
        Line::from(Span::styled(
            format!("[ {} ]", action),
            Style::default().fg(color(palette.primary)),
        )),
    ];
    f.render_widget(
        Paragraph::new(text)
            .alignment(ratatui::layout::Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color(palette.border))),
            ),
        area,
    );
}

// ============================================================================
// HELPERS
// ============================================================================

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Blue => Color::Rgb(66, 133, 244),
        Accent::Purple => Color::Rgb(156, 39, 176),
        Accent::Teal => Color::Rgb(0, 150, 136),
        Accent::Cyan => Color::Rgb(0, 188, 212),
        Accent::Green => Color::Rgb(76, 175, 80),
        Accent::Orange => Color::Rgb(255, 152, 0),
        Accent::Pink => Color::Rgb(233, 30, 99),
        Accent::Indigo => Color::Rgb(63, 81, 181),
        Accent::Red => Color::Rgb(244, 67, 54),
    }
}

/// Carousel indicator, e.g. "○ ● ○"
fn dots(current: usize, count: usize) -> String {
    (0..count)
        .map(|i| if i == current { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

fn wrap_text(text: &str, width: usize) -> String {
    if text.len() <= width {
        text.to_string()
    } else {
        let mut result = String::new();
        let mut current_line = String::new();

        for word in text.split_whitespace() {
            if current_line.len() + word.len() + 1 <= width {
                if !current_line.is_empty() {
                    current_line.push(' ');
                }
                current_line.push_str(word);
            } else {
                if !result.is_empty() {
                    result.push_str("\n  ");
                }
                result.push_str(&current_line);
                current_line = word.to_string();
            }
        }

        if !current_line.is_empty() {
            if !result.is_empty() {
                result.push_str("\n  ");
            }
            result.push_str(&current_line);
        }

        result
    }
}
