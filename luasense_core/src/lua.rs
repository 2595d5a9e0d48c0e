//! 内置 Lua 词表：保留字、标准全局函数、标准库成员以及常见兼容名。
//!
//! 词表进程内只初始化一次（惰性、线程安全），之后只读。

use once_cell::sync::Lazy;

use crate::completer::Autocompleter;
use crate::vocabulary::StaticVocabulary;

/// Lua 5.x 保留字。
pub const LUA_RESERVED_WORDS: &[&str] = &[
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto", "if", "in",
    "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

/// 完整候选表（定义顺序即默认输出顺序）。
///
/// `package.loaders` 在兼容区重复出现一次，构造词表时会去重。
pub const LUA_VOCABULARY: &[&str] = &[
    // 保留字
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto", "if", "in",
    "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
    // 标准全局
    "_G", "_VERSION", "assert", "collectgarbage", "dofile", "error", "getmetatable", "ipairs",
    "load", "loadfile", "loadstring", "next", "pairs", "pcall", "print", "rawequal", "rawget",
    "rawlen", "rawset", "require", "select", "setmetatable", "tonumber", "tostring", "type",
    "xpcall",
    // coroutine
    "coroutine.create", "coroutine.resume", "coroutine.running", "coroutine.status",
    "coroutine.wrap", "coroutine.yield",
    // package
    "package.config", "package.cpath", "package.path", "package.loaded", "package.loaders",
    "package.searchers", "package.searchpath", "package.preload", "package.loadlib",
    // string
    "string.byte", "string.char", "string.dump", "string.find", "string.format", "string.gmatch",
    "string.gsub", "string.len", "string.lower", "string.match", "string.rep", "string.reverse",
    "string.sub", "string.upper",
    // table（table.maxn 只在部分版本/兼容库里有）
    "table.concat", "table.insert", "table.move", "table.pack", "table.remove", "table.sort",
    "table.unpack", "table.maxn",
    // math
    "math.abs", "math.acos", "math.asin", "math.atan", "math.atan2", "math.ceil", "math.cos",
    "math.cosh", "math.deg", "math.exp", "math.floor", "math.fmod", "math.frexp", "math.huge",
    "math.ldexp", "math.log", "math.log10", "math.max", "math.min", "math.modf", "math.pi",
    "math.pow", "math.rad", "math.random", "math.randomseed", "math.sin", "math.sinh",
    "math.sqrt", "math.tan", "math.tanh",
    // io
    "io.close", "io.flush", "io.input", "io.lines", "io.open", "io.output", "io.popen", "io.read",
    "io.tmpfile", "io.type", "io.write",
    // os
    "os.clock", "os.date", "os.difftime", "os.execute", "os.exit", "os.getenv", "os.remove",
    "os.rename", "os.time", "os.tmpname",
    // debug
    "debug.debug", "debug.gethook", "debug.getinfo", "debug.getlocal", "debug.getmetatable",
    "debug.getregistry", "debug.getupvalue", "debug.sethook", "debug.setlocal",
    "debug.setupvalue", "debug.traceback",
    // utf8
    "utf8.char", "utf8.charpattern", "utf8.codepoint", "utf8.codes", "utf8.len", "utf8.offset",
    "utf8.nfcnormalize", "utf8.normalize", "utf8.next",
    // 兼容全局
    "unpack", "module", "package.loaders", "loadlib", "bit32", "bit32.band", "bit32.bnot",
    "bit32.bor", "bit32.bxor", "bit32.lshift", "bit32.rshift", "bit32.arshift", "bit32.extract",
    "bit32.replace", "bit32.test",
    // 生态里常见的辅助/废弃名
    "pairsByKeys", "table.foreach", "table.foreachi",
];

static LUA: Lazy<StaticVocabulary> =
    Lazy::new(|| StaticVocabulary::from_words(LUA_VOCABULARY.iter().copied()));

static DEFAULT_COMPLETER: Lazy<Autocompleter<&'static StaticVocabulary>> =
    Lazy::new(|| Autocompleter::new(lua_vocabulary()));

/// 进程级内置词表。
pub fn lua_vocabulary() -> &'static StaticVocabulary {
    &LUA
}

/// 进程级默认补全器（定义顺序，最少 2 个字符）。
pub fn default_completer() -> &'static Autocompleter<&'static StaticVocabulary> {
    &DEFAULT_COMPLETER
}
