use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table},
    Frame,
};

use crate::app::{App, Exclusao, InputMode, View};
use crate::models::{formatar_data, Situacao};

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Status/Help bar
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);

    match app.view {
        View::Login => draw_login_view(frame, chunks[1]),
        View::Painel => draw_painel_view(frame, app, chunks[1]),
        View::Disciplinas => draw_kanban_view(frame, app, chunks[1]),
        View::Provas => draw_provas_view(frame, app, chunks[1]),
    }

    draw_status_bar(frame, app, chunks[2]);

    if app.input_mode == InputMode::Editing {
        draw_input_popup(frame, app);
    }

    if app.confirmacao.is_some() {
        draw_confirm_popup(frame, app);
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let filtro = match &app.filtro_semestre {
        Some(semestre) => format!(" [semestre: {}]", semestre),
        None => String::new(),
    };
    let title = match app.view {
        View::Login => " Estuda - Login ".to_string(),
        View::Painel => format!(" Estuda - Painel{} ", filtro),
        View::Disciplinas => format!(" Estuda - Disciplinas{} ", filtro),
        View::Provas => " Estuda - Provas ".to_string(),
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_login_view(frame: &mut Frame, area: Rect) {
    let linhas = vec![
        Line::from(""),
        Line::from("Bem-vindo ao Estuda").centered(),
        Line::from(""),
        Line::from("l / Enter: entrar    r: criar conta    q: sair").centered(),
    ];
    let paragraph =
        Paragraph::new(linhas).block(Block::default().borders(Borders::ALL).title(" Acesso "));
    frame.render_widget(paragraph, area);
}

fn draw_painel_view(frame: &mut Frame, app: &App, area: Rect) {
    let linhas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),  // Metric cards
            Constraint::Min(8),     // Chart + pomodoro
            Constraint::Length(10), // Schedule grid
        ])
        .split(area);

    draw_metric_cards(frame, app, linhas[0]);

    let meio = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(linhas[1]);

    draw_grafico(frame, app, meio[0]);
    draw_pomodoro(frame, app, meio[1]);
    draw_grade(frame, app, linhas[2]);
}

fn draw_metric_cards(frame: &mut Frame, app: &App, area: Rect) {
    let cartoes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let metricas = &app.metricas;
    let valores = [
        ("Total", metricas.total, Color::White),
        ("Não iniciado", metricas.nao_iniciado, Color::Red),
        ("Em andamento", metricas.em_andamento, Color::Yellow),
        ("Concluído", metricas.concluido, Color::Green),
    ];

    for (i, (titulo, valor, cor)) in valores.iter().enumerate() {
        let card = Paragraph::new(Line::from(Span::styled(
            valor.to_string(),
            Style::default().fg(*cor).add_modifier(Modifier::BOLD),
        )))
        .centered()
        .block(
            Block::default()
                .title(format!(" {} ", titulo))
                .borders(Borders::ALL),
        );
        frame.render_widget(card, cartoes[i]);
    }
}

fn draw_grafico(frame: &mut Frame, app: &App, area: Rect) {
    let metricas = &app.metricas;
    let dados = [
        ("N.Inic", metricas.nao_iniciado.max(0) as u64),
        ("Andam", metricas.em_andamento.max(0) as u64),
        ("Concl", metricas.concluido.max(0) as u64),
    ];

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Progresso ")
                .borders(Borders::ALL),
        )
        .data(&dados)
        .bar_width(7)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));

    frame.render_widget(chart, area);
}

fn draw_pomodoro(frame: &mut Frame, app: &App, area: Rect) {
    let estado = if app.pomodoro.rodando {
        Span::styled("rodando", Style::default().fg(Color::Green))
    } else if app.pomodoro.restante == 0 {
        Span::styled("fim!", Style::default().fg(Color::Red))
    } else {
        Span::styled("pausado", Style::default().fg(Color::Yellow))
    };

    let linhas = vec![
        Line::from(""),
        Line::from(Span::styled(
            app.pomodoro.formatar_tempo(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(estado).centered(),
        Line::from(""),
        Line::from("espaço: iniciar/pausar   x: reiniciar").centered(),
    ];

    let paragraph =
        Paragraph::new(linhas).block(Block::default().borders(Borders::ALL).title(" Pomodoro "));
    frame.render_widget(paragraph, area);
}

fn draw_grade(frame: &mut Frame, app: &App, area: Rect) {
    let linhas = app.linhas_grade();
    let rows: Vec<Row> = linhas
        .iter()
        .map(|linha| {
            Row::new(vec![
                Cell::from(linha.disciplina.clone()),
                Cell::from(linha.dia.clone()),
                Cell::from(linha.inicio.clone()),
                Cell::from(linha.fim.clone()),
                Cell::from(linha.periodo.clone()),
                Cell::from(linha.situacao.rotulo()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(24),
            Constraint::Percentage(12),
            Constraint::Percentage(10),
            Constraint::Percentage(10),
            Constraint::Percentage(28),
            Constraint::Percentage(16),
        ],
    )
    .header(
        Row::new(vec![
            "Disciplina",
            "Dia",
            "Início",
            "Fim",
            "Período",
            "Situação",
        ])
        .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(
        Block::default()
            .title(" Grade semanal ")
            .borders(Borders::ALL),
    );

    frame.render_widget(table, area);
}

fn draw_kanban_view(frame: &mut Frame, app: &App, area: Rect) {
    let partes = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(8)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(partes[0]);

    for (i, situacao) in Situacao::TODAS.iter().enumerate() {
        draw_kanban_column(frame, app, columns[i], *situacao);
    }

    draw_detalhes(frame, app, partes[1]);
}

fn draw_detalhes(frame: &mut Frame, app: &App, area: Rect) {
    let detalhes = app.detalhes_do_cartao();
    let linhas: Vec<Line> = if detalhes.is_empty() {
        vec![Line::from("Nenhum cartão selecionado")]
    } else {
        detalhes
            .iter()
            .map(|(rotulo, valor)| {
                Line::from(vec![
                    Span::styled(
                        format!("{}: ", rotulo),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(valor.clone()),
                ])
            })
            .collect()
    };

    let paragraph =
        Paragraph::new(linhas).block(Block::default().borders(Borders::ALL).title(" Detalhes "));
    frame.render_widget(paragraph, area);
}

fn draw_kanban_column(frame: &mut Frame, app: &App, area: Rect, situacao: Situacao) {
    let is_selected_column = app.coluna == situacao;
    let cartoes = app.cartoes_na_coluna(situacao);

    let items: Vec<ListItem> = cartoes
        .iter()
        .enumerate()
        .map(|(i, disciplina)| {
            let style = if is_selected_column && i == app.indice_cartao {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let linha = format!("{} ({})", disciplina.nome, disciplina.semestre.trim());
            ListItem::new(linha).style(style)
        })
        .collect();

    let border_color = if is_selected_column {
        Color::Cyan
    } else {
        Color::White
    };

    let list = List::new(items).block(
        Block::default()
            .title(format!(" {} ({}) ", situacao.rotulo(), cartoes.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );

    frame.render_widget(list, area);
}

fn draw_provas_view(frame: &mut Frame, app: &App, area: Rect) {
    let rows: Vec<Row> = app
        .provas
        .iter()
        .enumerate()
        .map(|(i, prova)| {
            let style = if i == app.indice_prova {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(prova.titulo.clone()),
                Cell::from(app.nome_da_disciplina(prova.disciplina_id)),
                Cell::from(formatar_data(prova.data)),
                Cell::from(prova.situacao.rotulo()),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(15),
            Constraint::Percentage(20),
        ],
    )
    .header(
        Row::new(vec!["Título", "Disciplina", "Data", "Situação"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(
        Block::default()
            .title(format!(" Provas ({}) ", app.provas.len()))
            .borders(Borders::ALL),
    );

    frame.render_widget(table, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.view {
        View::Login => "l: entrar | r: registrar | q: sair",
        View::Painel => {
            "Tab/d: disciplinas | p: provas | s: semestre | espaço: pomodoro | r: atualizar | q: sair"
        }
        View::Disciplinas => {
            "h/l: coluna | j/k: cartão | H/L: mover | J/K: reordenar | n: nova | d: excluir | s: semestre"
        }
        View::Provas => "j/k: navegar | n: nova | m: avançar situação | d: excluir | Esc: painel",
    };

    let status = if let Some(msg) = &app.status_message {
        Line::from(vec![
            Span::styled(msg, Style::default().fg(Color::Yellow)),
            Span::raw(" | "),
            Span::raw(help_text),
        ])
    } else {
        Line::from(help_text)
    };

    let paragraph = Paragraph::new(status)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

fn draw_input_popup(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 20, frame.area());
    frame.render_widget(Clear, area);

    let total = app.formulario.rotulos().len();
    let titulo = format!(
        " {} - {} ({}/{}) ",
        app.formulario.titulo(),
        app.rotulo_atual(),
        app.passo + 1,
        total
    );

    let entrada = app.entrada_mascarada();
    let input = Paragraph::new(entrada.clone())
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .title(titulo)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(input, area);

    let cursor_x = (area.x + 1 + entrada.chars().count() as u16).min(area.x + area.width - 2);
    frame.set_cursor_position((cursor_x, area.y + 1));
}

fn draw_confirm_popup(frame: &mut Frame, app: &App) {
    let Some(exclusao) = app.confirmacao else {
        return;
    };
    let alvo = match exclusao {
        Exclusao::Disciplina(id) => format!("disciplina \"{}\"", app.nome_da_disciplina(id)),
        Exclusao::Prova(id) => {
            let titulo = app
                .provas
                .iter()
                .find(|p| p.id == id)
                .map(|p| p.titulo.clone())
                .unwrap_or_else(|| "?".to_string());
            format!("prova \"{}\"", titulo)
        }
    };

    let area = centered_rect(50, 20, frame.area());
    frame.render_widget(Clear, area);

    let linhas = vec![
        Line::from(format!("Excluir {}?", alvo)).centered(),
        Line::from(""),
        Line::from("s/Enter: confirmar    n/Esc: cancelar").centered(),
    ];

    let paragraph = Paragraph::new(linhas).block(
        Block::default()
            .title(" Confirmar exclusão ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );

    frame.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
