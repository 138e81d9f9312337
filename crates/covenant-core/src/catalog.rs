//! Immutable name catalogs.
//!
//! Every set here is fixed policy data: computed once per process into shared
//! read-only storage, never touched by per-check state.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Decorator marking a contract's externally callable entry point.
pub const EXPORT_DECORATOR: &str = "export";

/// Decorator marking a contract's one-time initializer.
pub const CONSTRUCT_DECORATOR: &str = "construct";

pub const VALID_DECORATORS: [&str; 2] = [EXPORT_DECORATOR, CONSTRUCT_DECORATOR];

/// The execution-context object contract code must never reference.
pub const RUNTIME_HANDLE: &str = "rt";

/// Naming marker reserved for internal use.
pub const SYSTEM_MARKER: char = '_';

/// Constructors that create persistent storage handles.
pub const STORAGE_CONSTRUCTORS: [&str; 5] =
    ["Variable", "Hash", "ForeignVariable", "ForeignHash", "LogEvent"];

/// Storage constructors whose `contract`/`name` keywords must stay implicit.
/// The foreign constructors legitimately name another contract's namespace.
pub const KEYWORD_GUARDED_CONSTRUCTORS: [&str; 3] = ["Variable", "Hash", "LogEvent"];

/// Keyword names a contract may never pass to a guarded storage constructor.
pub const RESERVED_STORAGE_KEYWORDS: [&str; 2] = ["contract", "name"];

/// Annotation spellings accepted on exported-function arguments.
pub const ALLOWED_ANNOTATIONS: [&str; 9] = [
    "dict",
    "list",
    "str",
    "int",
    "float",
    "bool",
    "datetime.timedelta",
    "datetime.datetime",
    "Any",
];

/// Builtin names that stay available inside a contract.
pub const ALLOWED_BUILTINS: [&str; 40] = [
    "Exception",
    "False",
    "None",
    "True",
    "abs",
    "all",
    "any",
    "ascii",
    "bin",
    "bool",
    "bytearray",
    "bytes",
    "chr",
    "dict",
    "divmod",
    "filter",
    "format",
    "frozenset",
    "hex",
    "int",
    "isinstance",
    "issubclass",
    "import",
    "len",
    "list",
    "map",
    "max",
    "min",
    "oct",
    "ord",
    "pow",
    "range",
    "reversed",
    "round",
    "set",
    "sorted",
    "str",
    "sum",
    "tuple",
    "zip",
];

/// Substrings whitelisting external-checker messages about sandbox-injected
/// names. Applies only to the external tool's output, never to policy
/// violations.
pub const DEFAULT_WHITELIST_PATTERNS: [&str; 18] = [
    "export",
    "construct",
    "Hash",
    "Variable",
    "ctx",
    "now",
    "random",
    "ForeignHash",
    "ForeignVariable",
    "block_num",
    "block_hash",
    "importlib",
    "hashlib",
    "datetime",
    "crypto",
    "decimal",
    "Any",
    "LogEvent",
];

/// The host runtime's full builtin namespace (CPython's `builtins` module).
/// Static stand-in for `dir(builtins)`.
const PYTHON_BUILTINS: [&str; 157] = [
    "ArithmeticError",
    "AssertionError",
    "AttributeError",
    "BaseException",
    "BaseExceptionGroup",
    "BlockingIOError",
    "BrokenPipeError",
    "BufferError",
    "BytesWarning",
    "ChildProcessError",
    "ConnectionAbortedError",
    "ConnectionError",
    "ConnectionRefusedError",
    "ConnectionResetError",
    "DeprecationWarning",
    "EOFError",
    "Ellipsis",
    "EncodingWarning",
    "EnvironmentError",
    "Exception",
    "ExceptionGroup",
    "False",
    "FileExistsError",
    "FileNotFoundError",
    "FloatingPointError",
    "FutureWarning",
    "GeneratorExit",
    "IOError",
    "ImportError",
    "ImportWarning",
    "IndentationError",
    "IndexError",
    "InterruptedError",
    "IsADirectoryError",
    "KeyError",
    "KeyboardInterrupt",
    "LookupError",
    "MemoryError",
    "ModuleNotFoundError",
    "NameError",
    "None",
    "NotADirectoryError",
    "NotImplemented",
    "NotImplementedError",
    "OSError",
    "OverflowError",
    "PendingDeprecationWarning",
    "PermissionError",
    "ProcessLookupError",
    "RecursionError",
    "ReferenceError",
    "ResourceWarning",
    "RuntimeError",
    "RuntimeWarning",
    "StopAsyncIteration",
    "StopIteration",
    "SyntaxError",
    "SyntaxWarning",
    "SystemError",
    "SystemExit",
    "TabError",
    "TimeoutError",
    "True",
    "TypeError",
    "UnboundLocalError",
    "UnicodeDecodeError",
    "UnicodeEncodeError",
    "UnicodeError",
    "UnicodeTranslateError",
    "UnicodeWarning",
    "UserWarning",
    "ValueError",
    "Warning",
    "ZeroDivisionError",
    "__build_class__",
    "__debug__",
    "__doc__",
    "__import__",
    "__loader__",
    "__name__",
    "__package__",
    "__spec__",
    "abs",
    "aiter",
    "all",
    "anext",
    "any",
    "ascii",
    "bin",
    "bool",
    "breakpoint",
    "bytearray",
    "bytes",
    "callable",
    "chr",
    "classmethod",
    "compile",
    "complex",
    "copyright",
    "credits",
    "delattr",
    "dict",
    "dir",
    "divmod",
    "enumerate",
    "eval",
    "exec",
    "exit",
    "filter",
    "float",
    "format",
    "frozenset",
    "getattr",
    "globals",
    "hasattr",
    "hash",
    "help",
    "hex",
    "id",
    "input",
    "int",
    "isinstance",
    "issubclass",
    "iter",
    "len",
    "license",
    "list",
    "locals",
    "map",
    "max",
    "memoryview",
    "min",
    "next",
    "object",
    "oct",
    "open",
    "ord",
    "pow",
    "print",
    "property",
    "quit",
    "range",
    "repr",
    "reversed",
    "round",
    "set",
    "setattr",
    "slice",
    "sorted",
    "staticmethod",
    "str",
    "sum",
    "super",
    "tuple",
    "type",
    "vars",
    "zip",
];

/// Standard-library module names a contract may not import directly.
/// Static stand-in for `sys.stdlib_module_names` + `sys.builtin_module_names`;
/// sandbox-injected modules are re-admitted by the boundary whitelist.
const STDLIB_MODULES: [&str; 210] = [
    "abc",
    "aifc",
    "argparse",
    "array",
    "ast",
    "asynchat",
    "asyncio",
    "asyncore",
    "atexit",
    "audioop",
    "base64",
    "bdb",
    "binascii",
    "bisect",
    "builtins",
    "bz2",
    "cProfile",
    "calendar",
    "cgi",
    "cgitb",
    "chunk",
    "cmath",
    "cmd",
    "code",
    "codecs",
    "codeop",
    "collections",
    "colorsys",
    "compileall",
    "concurrent",
    "configparser",
    "contextlib",
    "contextvars",
    "copy",
    "copyreg",
    "crypt",
    "csv",
    "ctypes",
    "curses",
    "dataclasses",
    "datetime",
    "dbm",
    "decimal",
    "difflib",
    "dis",
    "distutils",
    "doctest",
    "email",
    "encodings",
    "ensurepip",
    "enum",
    "errno",
    "faulthandler",
    "fcntl",
    "filecmp",
    "fileinput",
    "fnmatch",
    "fractions",
    "ftplib",
    "functools",
    "gc",
    "getopt",
    "getpass",
    "gettext",
    "glob",
    "graphlib",
    "grp",
    "gzip",
    "hashlib",
    "heapq",
    "hmac",
    "html",
    "http",
    "idlelib",
    "imaplib",
    "imghdr",
    "imp",
    "importlib",
    "inspect",
    "io",
    "ipaddress",
    "itertools",
    "json",
    "keyword",
    "lib2to3",
    "linecache",
    "locale",
    "logging",
    "lzma",
    "mailbox",
    "mailcap",
    "marshal",
    "math",
    "mimetypes",
    "mmap",
    "modulefinder",
    "msilib",
    "msvcrt",
    "multiprocessing",
    "netrc",
    "nis",
    "nntplib",
    "ntpath",
    "nturl2path",
    "numbers",
    "opcode",
    "operator",
    "optparse",
    "os",
    "ossaudiodev",
    "pathlib",
    "pdb",
    "pickle",
    "pickletools",
    "pipes",
    "pkgutil",
    "platform",
    "plistlib",
    "poplib",
    "posix",
    "posixpath",
    "pprint",
    "profile",
    "pstats",
    "pty",
    "pwd",
    "py_compile",
    "pyclbr",
    "pydoc",
    "queue",
    "quopri",
    "random",
    "re",
    "readline",
    "reprlib",
    "resource",
    "rlcompleter",
    "runpy",
    "sched",
    "secrets",
    "select",
    "selectors",
    "shelve",
    "shlex",
    "shutil",
    "signal",
    "site",
    "smtplib",
    "sndhdr",
    "socket",
    "socketserver",
    "spwd",
    "sqlite3",
    "sre_compile",
    "sre_constants",
    "sre_parse",
    "ssl",
    "stat",
    "statistics",
    "string",
    "stringprep",
    "struct",
    "subprocess",
    "sunau",
    "symtable",
    "sys",
    "sysconfig",
    "syslog",
    "tabnanny",
    "tarfile",
    "telnetlib",
    "tempfile",
    "termios",
    "textwrap",
    "threading",
    "time",
    "timeit",
    "tkinter",
    "token",
    "tokenize",
    "tomllib",
    "trace",
    "traceback",
    "tracemalloc",
    "tty",
    "turtle",
    "turtledemo",
    "types",
    "typing",
    "unicodedata",
    "unittest",
    "urllib",
    "uu",
    "uuid",
    "venv",
    "warnings",
    "wave",
    "weakref",
    "webbrowser",
    "winreg",
    "winsound",
    "wsgiref",
    "xdrlib",
    "xml",
    "xmlrpc",
    "zipapp",
    "zipfile",
    "zipimport",
    "zlib",
    "zoneinfo",
];

/// Builtin names a contract may not reference: the full builtin namespace
/// minus [`ALLOWED_BUILTINS`].
pub fn illegal_builtins() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        let allowed: HashSet<&str> = ALLOWED_BUILTINS.into_iter().collect();
        PYTHON_BUILTINS
            .into_iter()
            .filter(|name| !allowed.contains(name))
            .collect()
    })
}

pub fn stdlib_modules() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STDLIB_MODULES.into_iter().collect())
}

pub fn allowed_annotations() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| ALLOWED_ANNOTATIONS.into_iter().collect())
}

pub fn is_storage_constructor(name: &str) -> bool {
    STORAGE_CONSTRUCTORS.contains(&name)
}

pub fn is_valid_decorator(name: &str) -> bool {
    VALID_DECORATORS.contains(&name)
}

/// True when the identifier uses the reserved leading/trailing marker.
pub fn is_system_name(name: &str) -> bool {
    name.starts_with(SYSTEM_MARKER) || name.ends_with(SYSTEM_MARKER)
}
