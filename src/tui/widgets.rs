use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::color::Color as AppColor;
use crate::theme::ColorPalette;

pub(crate) fn to_color(c: AppColor) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// Choose black or white foreground for readable text on the given background.
fn contrast_fg(c: AppColor) -> Color {
    if c.relative_luminance() > 0.4 {
        Color::Black
    } else {
        Color::White
    }
}

/// Renders the seven palette colors as labelled swatches, one per row, with
/// each color's contrast against the palette background.
pub struct PaletteWidget<'a> {
    palette: &'a ColorPalette,
}

impl<'a> PaletteWidget<'a> {
    pub fn new(palette: &'a ColorPalette) -> Self {
        Self { palette }
    }
}

fn swatch_line(name: &'static str, color: AppColor, palette: &ColorPalette) -> Line<'static> {
    let ratio = AppColor::contrast_ratio(&color, &palette.background);
    Line::from(vec![
        Span::raw("  "),
        Span::styled(
            format!("{:^8}", color.to_hex()),
            Style::default().bg(to_color(color)).fg(contrast_fg(color)),
        ),
        Span::styled(
            format!("  {name:<14}"),
            Style::default()
                .fg(to_color(palette.text))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("contrast {ratio:.1}:1"),
            Style::default().fg(to_color(palette.text_secondary)),
        ),
    ])
}

impl Widget for PaletteWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = Block::bordered()
            .title(" Palette ")
            .border_style(Style::default().fg(to_color(p.primary)))
            .style(Style::default().bg(to_color(p.surface)));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = p
            .named_colors()
            .into_iter()
            .map(|(name, color)| swatch_line(name, color, p))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_every_hex_value() {
        let palette = ColorPalette::DEFAULT;
        let area = Rect::new(0, 0, 50, 9);
        let mut buf = Buffer::empty(area);
        PaletteWidget::new(&palette).render(area, &mut buf);

        let text: String = (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        for (name, color) in palette.named_colors() {
            assert!(text.contains(&color.to_hex()), "missing {name} in:\n{text}");
        }
        assert!(text.contains("textSecondary"));
    }

    #[test]
    fn swatch_uses_palette_color_as_background() {
        let palette = ColorPalette::DEFAULT;
        let area = Rect::new(0, 0, 50, 9);
        let mut buf = Buffer::empty(area);
        PaletteWidget::new(&palette).render(area, &mut buf);

        // First row inside the border, first swatch cell after the indent.
        assert_eq!(buf[(3, 1)].bg, to_color(palette.primary));
    }

    #[test]
    fn contrast_fg_picks_readable_text() {
        assert_eq!(contrast_fg(AppColor::WHITE), Color::Black);
        assert_eq!(contrast_fg(AppColor::BLACK), Color::White);
    }
}
