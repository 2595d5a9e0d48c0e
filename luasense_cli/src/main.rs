use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use luasense_core::{AutocompleteError, Autocompleter, SortOrder, Vocabulary, lua::lua_vocabulary};
use luasense_dict::WordListVocabulary;

mod logging;

type Completer = Autocompleter<Arc<dyn Vocabulary>>;

/// Lua 关键字/内置函数前缀补全。
#[derive(Debug, Parser)]
#[command(name = "luasense", version)]
struct Args {
    /// 查询串（至少 2 个字符）；省略时进入交互模式
    queries: Vec<String>,

    /// 词表文件（每行一个词条，可选 `<TAB>kind`）；默认使用内置 Lua 词表
    #[arg(long, value_name = "PATH")]
    vocab: Option<PathBuf>,

    /// 结果顺序
    #[arg(long, value_enum, default_value_t = Order::Definition)]
    order: Order,

    /// 只显示前 N 条
    #[arg(long, value_name = "N")]
    limit: Option<usize>,

    /// 显示词条分类
    #[arg(long)]
    kinds: bool,

    /// 日志过滤规则，覆盖 RUST_LOG
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// 关闭日志颜色
    #[arg(long)]
    no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Order {
    /// 词表定义顺序
    Definition,
    /// 短的在前，同长按字典序
    Length,
}

impl From<Order> for SortOrder {
    fn from(o: Order) -> Self {
        match o {
            Order::Definition => SortOrder::Definition,
            Order::Length => SortOrder::LengthThenAlpha,
        }
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    logging::init_logger(args.no_color, args.log_level.as_deref())
        .context("初始化日志失败")?;

    let vocabulary = load_vocabulary(args.vocab.as_deref())?;
    tracing::info!(entries = vocabulary.len(), order = ?args.order, "vocabulary ready");
    let completer: Completer = Autocompleter::new(vocabulary).order(args.order.into());

    let mut out = io::stdout().lock();
    if args.queries.is_empty() {
        repl(&completer, &args, &mut out)?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut rejected = false;
    for q in &args.queries {
        if args.queries.len() > 1 {
            writeln!(out, "query:{q}")?;
        }
        if !print_completions(&completer, q, &args, &mut out)? {
            rejected = true;
        }
    }
    Ok(if rejected { ExitCode::from(2) } else { ExitCode::SUCCESS })
}

fn load_vocabulary(path: Option<&Path>) -> Result<Arc<dyn Vocabulary>> {
    match path {
        Some(p) => {
            let v = WordListVocabulary::from_path(p)
                .with_context(|| format!("加载词表 {} 失败", p.display()))?;
            Ok(Arc::new(v))
        }
        None => Ok(Arc::new(lua_vocabulary())),
    }
}

/// 打印一次补全结果；查询串太短时打印错误并返回 false。
fn print_completions(
    completer: &Completer,
    query: &str,
    args: &Args,
    out: &mut impl Write,
) -> io::Result<bool> {
    let hits = match completer.complete(query) {
        Ok(hits) => hits,
        Err(e @ AutocompleteError::TooShortRequest { .. }) => {
            writeln!(out, "error: {e}")?;
            return Ok(false);
        }
    };

    if hits.is_empty() {
        writeln!(out, "(无匹配)")?;
        return Ok(true);
    }

    let shown = args.limit.unwrap_or(hits.len()).min(hits.len());
    for (i, c) in hits.iter().take(shown).enumerate() {
        let n = i + 1;
        if args.kinds {
            writeln!(out, "{n}. {}\t({})", c.text, c.kind)?;
        } else {
            writeln!(out, "{n}. {}", c.text)?;
        }
    }
    if shown < hits.len() {
        writeln!(out, "... 共 {} 条", hits.len())?;
    }
    Ok(true)
}

fn repl(completer: &Completer, args: &Args, out: &mut impl Write) -> Result<()> {
    let source = match &args.vocab {
        Some(p) => p.display().to_string(),
        None => "builtin".to_string(),
    };
    writeln!(
        out,
        "luasense | vocab: {source} ({} entries) | order: {:?}",
        completer.vocabulary().len(),
        completer.sort_order()
    )?;
    writeln!(out, "输入前缀后回车。输入 :q 退出。")?;

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        line.clear();
        write!(out, "lua> ")?;
        out.flush()?;
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim_end_matches(['\r', '\n']);
        if input.is_empty() {
            continue;
        }
        if input == ":q" || input == ":quit" || input == ":exit" {
            break;
        }
        print_completions(completer, input, args, out)?;
    }

    Ok(())
}
